// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module
//!
//! Argument parsing, shared runtime setup and the non-interactive commands.

pub mod args;
pub mod commands;
pub mod runtime;

pub use args::*;
pub use commands::{run_ask, run_theme, AskReport};
pub use runtime::Runtime;
