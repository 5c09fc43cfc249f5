// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state management for the history pane

/// Scroll position and viewport for the history pane
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll position in lines from the top
    pub scroll_offset: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Whether the view follows the end of the history
    pub follow_tail: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 20,
            follow_tail: true,
        }
    }

    fn max_offset(&self, total_height: usize) -> usize {
        total_height.saturating_sub(self.viewport_height as usize)
    }

    /// Fit the offset to a new layout. Called on every draw.
    pub fn layout(&mut self, viewport_height: u16, total_height: usize) {
        self.viewport_height = viewport_height;
        let max_offset = self.max_offset(total_height);
        if self.follow_tail {
            self.scroll_offset = max_offset;
        } else {
            self.scroll_offset = self.scroll_offset.min(max_offset);
        }
    }

    /// Jump to the end on the next layout, even if the user scrolled away.
    pub fn scroll_to_end(&mut self) {
        self.follow_tail = true;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        if lines > 0 {
            self.follow_tail = false;
        }
    }

    pub fn scroll_down(&mut self, lines: usize, total_height: usize) {
        let max_offset = self.max_offset(total_height);
        self.scroll_offset = (self.scroll_offset + lines).min(max_offset);
        if self.scroll_offset >= max_offset {
            self.follow_tail = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.follow_tail = false;
    }

    pub fn page_size(&self) -> usize {
        (self.viewport_height as usize).saturating_sub(2).max(1)
    }
}
