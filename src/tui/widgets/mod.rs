// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Custom widgets for the chat TUI

pub mod composer;
pub mod entry;
pub mod title_bar;

pub use composer::{AttachmentPreview, InputArea};
pub use entry::{history_lines, HistoryView};
pub use title_bar::TitleBar;
