// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input area and attachment preview widgets

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::chat::TextInput;
use crate::tui::palette::Palette;

/// Bordered single-line text input
pub struct InputArea<'a> {
    input: &'a TextInput,
    title: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a TextInput, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            input,
            title,
            placeholder: None,
            focused: true,
            palette,
        }
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible char and the cursor's column after it, measured in
    /// terminal columns so the cursor stays inside the box.
    fn scroll_window(&self, inner_width: usize) -> (usize, usize) {
        let prompt = 2;
        let room = inner_width.saturating_sub(prompt + 1).max(1);
        let before: Vec<char> = self.input.text().chars().take(self.input.cursor()).collect();

        let mut start = before.len();
        let mut column = 0;
        while start > 0 {
            let w = before[start - 1].width().unwrap_or(0);
            if column + w > room {
                break;
            }
            column += w;
            start -= 1;
        }
        (start, column)
    }

    /// Cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let (_, column) = self.scroll_window(inner_width);
        // border (1) + prompt "> " (2)
        let x = area.x + 1 + 2 + column as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(2)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.palette.accent
        } else {
            self.palette.muted
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.title))
            .style(self.palette.base());

        let inner_width = area.width.saturating_sub(2) as usize;
        let line = if self.input.is_empty() {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(border)),
                Span::styled(
                    self.placeholder.unwrap_or("").to_string(),
                    Style::default().fg(self.palette.muted),
                ),
            ])
        } else {
            let visible: String = self
                .input
                .text()
                .chars()
                .skip(self.scroll_window(inner_width).0)
                .collect();
            Line::from(vec![
                Span::styled("> ", Style::default().fg(border)),
                Span::raw(visible),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// One-line preview of the selected file with its dismiss hint
pub struct AttachmentPreview<'a> {
    filename: &'a str,
    palette: &'a Palette,
}

impl<'a> AttachmentPreview<'a> {
    pub fn new(filename: &'a str, palette: &'a Palette) -> Self {
        Self { filename, palette }
    }
}

impl<'a> Widget for AttachmentPreview<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" 📎 ", Style::default().fg(self.palette.accent)),
            Span::styled(self.filename.to_string(), Style::default().fg(self.palette.foreground).bold()),
            Span::styled("  (Ctrl+X to remove)", Style::default().fg(self.palette.muted)),
        ]);
        Paragraph::new(line)
            .style(self.palette.base())
            .render(area, buf);
    }
}
