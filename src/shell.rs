/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::io;
use std::io::BufRead;
use std::io::Write;

use thiserror::Error;

use crate::collection::LinearSet;
use crate::collection::SetOps;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid choice {0:?}, enter a number between 1 and 10")]
    InvalidChoice(String),
    #[error("unknown set {0:?}, choose A or B")]
    InvalidSetId(String),
    #[error("invalid element count {0:?}")]
    InvalidCount(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetId {
    A,
    B,
}

impl SetId {
    pub fn parse(input: &str) -> Result<Self, ShellError> {
        match input.trim() {
            "A" | "a" => Ok(SetId::A),
            "B" | "b" => Ok(SetId::B),
            other => Err(ShellError::InvalidSetId(other.to_string())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            SetId::A => "A",
            SetId::B => "B",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Accept,
    Display,
    DeleteElement,
    Size,
    Contains,
    Intersection,
    Union,
    Difference,
    Subset,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, ShellError> {
        match input.trim() {
            "1" => Ok(Command::Accept),
            "2" => Ok(Command::Display),
            "3" => Ok(Command::DeleteElement),
            "4" => Ok(Command::Size),
            "5" => Ok(Command::Contains),
            "6" => Ok(Command::Intersection),
            "7" => Ok(Command::Union),
            "8" => Ok(Command::Difference),
            "9" => Ok(Command::Subset),
            "10" => Ok(Command::Exit),
            other => Err(ShellError::InvalidChoice(other.to_string())),
        }
    }
}

/// The two named collections a session operates on. Owned explicitly
/// by the session rather than living in globals; results of the binary
/// operations are fresh sets, never aliases of these.
#[derive(Default, Debug)]
pub struct Session {
    a: LinearSet<String>,
    b: LinearSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, id: SetId) -> &LinearSet<String> {
        match id {
            SetId::A => &self.a,
            SetId::B => &self.b,
        }
    }

    pub fn set_mut(&mut self, id: SetId) -> &mut LinearSet<String> {
        match id {
            SetId::A => &mut self.a,
            SetId::B => &mut self.b,
        }
    }
}

const MENU: &str = "\
1. Accept sets
2. Display sets
3. Delete element
4. Size of sets
5. Containment check
6. Intersection
7. Union
8. Difference
9. Subset check
10. Exit";

/// Menu-driven loop over a [`Session`]. Generic over its channels so
/// tests can drive it with in-memory buffers.
///
/// Recoverable errors (bad menu choice, bad set id, bad count) are
/// reported on the output channel and the loop continues; only I/O
/// failures propagate. The loop ends on the exit command or on end of
/// input.
pub struct Shell<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            };
            match Command::parse(&choice) {
                Ok(Command::Exit) => {
                    writeln!(self.output, "End of session.")?;
                    break;
                }
                Ok(command) => {
                    if let Err(e) = self.dispatch(command) {
                        match e {
                            ShellError::Io(e) => return Err(e),
                            e => writeln!(self.output, "error: {}", e)?,
                        }
                    }
                }
                Err(e) => writeln!(self.output, "error: {}", e)?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), ShellError> {
        match command {
            Command::Accept => {
                self.accept_set(SetId::A)?;
                self.accept_set(SetId::B)?;
                writeln!(self.output, "Sets accepted.")?;
            }
            Command::Display => {
                self.display_set(SetId::A)?;
                self.display_set(SetId::B)?;
            }
            Command::DeleteElement => {
                let id = SetId::parse(&self.prompt("Delete from which set (A/B)? ")?)?;
                let element = self.prompt("Element to delete: ")?;
                // Absence is not an error, per the set contract.
                if self.session.set_mut(id).remove(&element) {
                    writeln!(self.output, "Deleted {} from set {}", element, id.name())?;
                }
            }
            Command::Size => {
                for id in [SetId::A, SetId::B] {
                    let n = self.session.set(id).len();
                    writeln!(self.output, "Set {} has {} element(s)", id.name(), n)?;
                }
            }
            Command::Contains => {
                let element = self.prompt("Element to check: ")?;
                let id = SetId::parse(&self.prompt("Check in which set (A/B)? ")?)?;
                let verdict = if self.session.set(id).contains(&element) {
                    "present in"
                } else {
                    "not present in"
                };
                writeln!(self.output, "{} is {} set {}", element, verdict, id.name())?;
            }
            Command::Intersection => {
                let result = self.session.a.intersection(&self.session.b);
                self.display_result("Intersection", &result)?;
            }
            Command::Union => {
                let result = self.session.a.clone().union(self.session.b.clone());
                self.display_result("Union", &result)?;
            }
            Command::Difference => {
                let result = self.session.a.difference(&self.session.b);
                self.display_result("Difference", &result)?;
            }
            Command::Subset => {
                let verdict = if self.session.a.is_subset(&self.session.b) {
                    "Set A is a subset of set B"
                } else {
                    "Set A is not a subset of set B"
                };
                writeln!(self.output, "{}", verdict)?;
            }
            Command::Exit => unreachable!("exit is handled by the loop"),
        }
        Ok(())
    }

    fn accept_set(&mut self, id: SetId) -> Result<(), ShellError> {
        writeln!(self.output, "Enter set {}:", id.name())?;
        let count = self.prompt("Number of elements: ")?;
        let count: usize = count
            .trim()
            .parse()
            .map_err(|_| ShellError::InvalidCount(count.clone()))?;
        for _ in 0..count {
            let element = self.prompt("Element: ")?;
            self.session.set_mut(id).insert(element);
        }
        Ok(())
    }

    fn display_set(&mut self, id: SetId) -> Result<(), ShellError> {
        let set = self.session.set(id);
        if set.is_empty() {
            writeln!(self.output, "Set {} is empty", id.name())?;
        } else {
            writeln!(self.output, "Set {}: {}", id.name(), set)?;
        }
        Ok(())
    }

    fn display_result(&mut self, label: &str, set: &LinearSet<String>) -> Result<(), ShellError> {
        if set.is_empty() {
            writeln!(self.output, "{}: (empty)", label)?;
        } else {
            writeln!(self.output, "{}: {}", label, set)?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }
}
