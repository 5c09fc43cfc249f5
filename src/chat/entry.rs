// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation entries
//!
//! The history only ever grows: entries are appended in arrival order and
//! never edited or removed.

use chrono::{DateTime, Local};

/// Shown when the server rejects a message without giving a reason
pub const AI_ERROR_PLACEHOLDER: &str = "[Error from AI]";

/// Shown when the exchange fails below the application level
pub const SERVER_ERROR_PLACEHOLDER: &str = "[Server error]";

/// Echo text for a submitted attachment
pub fn attachment_notice(filename: &str) -> String {
    format!("[Attaching file: {}]", filename)
}

/// Who wrote an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "you",
            Sender::Ai => "ai",
        }
    }
}

/// One rendered line of the conversation
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub sender: Sender,
    pub text: String,
    pub received_at: DateTime<Local>,
}

impl ChatEntry {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            received_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Sender::Ai, text)
    }
}

impl PartialEq for ChatEntry {
    fn eq(&self, other: &Self) -> bool {
        self.sender == other.sender && self.text == other.text
    }
}

/// Append-only conversation log
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    entries: Vec<ChatEntry>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
