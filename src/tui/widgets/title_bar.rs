// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Title bar widget
//!
//! Shows the session values on the left and, on the right, either the
//! status message or the theme toggle glyph.

use ratatui::prelude::*;

use crate::tui::palette::Palette;

pub struct TitleBar<'a> {
    title: &'a str,
    user_name: &'a str,
    language: &'a str,
    toggle_glyph: Option<&'a str>,
    status_message: Option<&'a str>,
    status_is_error: bool,
    waiting: bool,
    palette: &'a Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, user_name: &'a str, language: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            user_name,
            language,
            toggle_glyph: None,
            status_message: None,
            status_is_error: false,
            waiting: false,
            palette,
        }
    }

    pub fn toggle(mut self, glyph: Option<&'a str>) -> Self {
        self.toggle_glyph = glyph;
        self
    }

    pub fn status(mut self, message: Option<&'a str>, is_error: bool) -> Self {
        self.status_message = message;
        self.status_is_error = is_error;
        self
    }

    pub fn waiting(mut self, waiting: bool) -> Self {
        self.waiting = waiting;
        self
    }
}

impl<'a> Widget for TitleBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 2 {
            return;
        }

        let bar = self.palette.bar();
        buf.set_style(Rect { height: 1, ..area }, bar);

        let mut left = vec![
            Span::styled(format!(" {} ", self.title), bar.bold()),
            Span::styled("─ ", bar),
            Span::styled(format!("{} · {}", self.user_name, self.language), bar),
        ];
        if self.waiting {
            left.push(Span::styled(" ● waiting", bar.fg(self.palette.accent)));
        }
        buf.set_line(area.x, area.y, &Line::from(left), area.width);

        let mut right: Vec<Span> = Vec::new();
        if let Some(status) = self.status_message {
            let color = if self.status_is_error {
                self.palette.error
            } else {
                self.palette.accent
            };
            right.push(Span::styled(status.to_string(), bar.fg(color)));
            right.push(Span::styled(" ", bar));
        }
        if let Some(glyph) = self.toggle_glyph {
            right.push(Span::styled(format!("[{}] ", glyph), bar));
        }

        let right = Line::from(right);
        let width = right.width() as u16;
        if width > 0 && width < area.width {
            buf.set_line(area.x + area.width - width, area.y, &right, width);
        }
    }
}
