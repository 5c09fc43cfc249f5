// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Colors for each theme

use ratatui::style::{Color, Style};

use crate::chat::Sender;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub user: Color,
    pub ai: Color,
    pub accent: Color,
    pub error: Color,
    pub bar_background: Color,
    pub bar_foreground: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                user: Color::Blue,
                ai: Color::Black,
                accent: Color::Magenta,
                error: Color::Red,
                bar_background: Color::Gray,
                bar_foreground: Color::Black,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::DarkGray,
                user: Color::Cyan,
                ai: Color::White,
                accent: Color::Yellow,
                error: Color::LightRed,
                bar_background: Color::DarkGray,
                bar_foreground: Color::White,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(self.bar_foreground).bg(self.bar_background)
    }

    /// Text color for an entry's sender
    pub fn sender(&self, sender: Sender) -> Color {
        match sender {
            Sender::User => self.user,
            Sender::Ai => self.ai,
        }
    }
}
