// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Composer state
//!
//! The text input, the file-selection control and the attachment preview
//! that shows which file is about to be sent.

use super::message::Attachment;

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn set_text(&mut self, s: &str) {
        self.buffer = s.to_string();
        self.cursor = self.char_len();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Text input plus file control plus preview region
#[derive(Debug, Clone, Default)]
pub struct Composer {
    pub input: TextInput,
    file: Option<Attachment>,
    preview_visible: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file, replacing any previous selection, and show its name.
    pub fn attach(&mut self, attachment: Attachment) {
        self.file = Some(attachment);
        self.preview_visible = true;
    }

    /// Empty the file control and hide the preview.
    pub fn clear_attachment(&mut self) {
        self.file = None;
        self.preview_visible = false;
    }

    /// Empty everything after a submission.
    pub fn reset(&mut self) {
        self.input.clear();
        self.clear_attachment();
    }

    pub fn selected_file(&self) -> Option<&Attachment> {
        self.file.as_ref()
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// File name shown in the preview region while it is visible.
    pub fn preview_label(&self) -> Option<&str> {
        if !self.preview_visible {
            return None;
        }
        self.file.as_ref().map(|f| f.filename.as_str())
    }
}
