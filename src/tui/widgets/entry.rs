// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation rendering
//!
//! Entries are wrapped here rather than by `Paragraph` so the scroll state
//! knows the exact line count of the history.

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::chat::ChatEntry;
use crate::tui::palette::Palette;

/// Left indent of entry bodies
const INDENT: usize = 2;

/// Make reply text safe to print: tabs become spaces, other control
/// characters (escape sequences included) become U+FFFD.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\t' => ' ',
            '\n' => '\n',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}

/// Hard-wrap `text` to `width` terminal columns per line. A wide
/// character that does not fit starts the next line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for c in raw.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(c);
            used += w;
        }
        lines.push(line);
    }
    lines
}

/// Lines for one entry: a header, the wrapped body, and a blank spacer.
pub fn entry_lines(entry: &ChatEntry, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let color = palette.sender(entry.sender);
    let body_width = (width as usize).saturating_sub(INDENT * 2);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}{}", " ".repeat(INDENT), entry.sender.label()),
            Style::default().fg(color).bold(),
        ),
        Span::styled(
            format!(" {}", entry.received_at.format("%H:%M")),
            Style::default().fg(palette.muted),
        ),
    ])];

    for line in wrap_text(&sanitize(&entry.text), body_width) {
        lines.push(Line::from(Span::styled(
            format!("{}{}", " ".repeat(INDENT), line),
            Style::default().fg(color),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// All entries, oldest first.
pub fn history_lines(entries: &[ChatEntry], width: u16, palette: &Palette) -> Vec<Line<'static>> {
    entries
        .iter()
        .flat_map(|entry| entry_lines(entry, width, palette))
        .collect()
}

/// The scrollable conversation pane
pub struct HistoryView<'a> {
    lines: Vec<Line<'static>>,
    palette: &'a Palette,
    offset: usize,
}

impl<'a> HistoryView<'a> {
    pub fn new(lines: Vec<Line<'static>>, palette: &'a Palette) -> Self {
        Self {
            lines,
            palette,
            offset: 0,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl<'a> Widget for HistoryView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
        Paragraph::new(self.lines)
            .style(self.palette.base())
            .scroll((offset, 0))
            .render(area, buf);
    }
}
