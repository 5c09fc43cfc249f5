// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! lingochat - terminal client for a language-aware AI chat backend.
//!
//! Architecture highlights:
//! - `chat`: composer, conversation history and the submission controller
//! - `theme`: light/dark theme, toggle control and cookie persistence
//! - `session`: the user name and language sent with every message
//! - `tui`: ratatui presentation of the chat
//! - `cli`, `config`: command line, settings and runtime wiring

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod theme;
pub mod tui;

pub use error::{LingoError, Result};
