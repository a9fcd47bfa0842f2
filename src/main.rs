/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use setkit::shell::Shell;

/// Interactive set-algebra shell over two named collections.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdout = io::stdout().lock();
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            Shell::new(BufReader::new(file), stdout).run()?;
        }
        None => {
            Shell::new(io::stdin().lock(), stdout).run()?;
        }
    }
    Ok(())
}
