/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod hash_set_impl;
mod linear_set;
mod set_ops;

pub use linear_set::*;
pub use set_ops::*;
