// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Light/dark theme switching
//!
//! The active theme is applied to the whole screen. A toggle control in the
//! title bar flips it and the choice is written to the `theme` cookie.

pub mod cookie;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LingoError, Result};

pub use cookie::{
    CookieStore, FileCookieStore, MemoryCookieStore, SharedCookieStore, ThemeCookie,
    THEME_COOKIE, THEME_COOKIE_MAX_AGE,
};

pub const DARK_GLYPH: &str = "🌙";
pub const LIGHT_GLYPH: &str = "☀️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle control
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => LIGHT_GLYPH,
            Theme::Dark => DARK_GLYPH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LingoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(LingoError::InvalidInput(format!(
                "unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

/// Theme the client starts with: the persisted cookie, else `fallback`.
///
/// This plays the part of the page bootstrap that applies the theme class
/// before any controller runs.
pub fn load_initial_theme(store: &dyn CookieStore, fallback: Theme) -> Theme {
    match store.get(THEME_COOKIE) {
        Ok(Some(raw)) => ThemeCookie::parse(&raw)
            .map(|cookie| cookie.theme)
            .unwrap_or(fallback),
        Ok(None) => fallback,
        Err(e) => {
            tracing::warn!(target: "lingochat.theme", error = %e, "could not read theme cookie, using {}", fallback);
            fallback
        }
    }
}

/// The on-screen toggle control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeToggle {
    glyph: String,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    fn show(&mut self, theme: Theme) {
        self.glyph = theme.glyph().to_string();
    }
}

/// Owns the applied theme, the optional toggle control and the cookie store
pub struct ThemeController {
    applied: Theme,
    toggle: Option<ThemeToggle>,
    store: Arc<dyn CookieStore>,
}

impl ThemeController {
    /// `applied` is the theme already in effect when the controller is built.
    pub fn new(applied: Theme, toggle: Option<ThemeToggle>, store: Arc<dyn CookieStore>) -> Self {
        Self {
            applied,
            toggle,
            store,
        }
    }

    /// Sync the toggle glyph with the applied theme. Does nothing without a toggle.
    pub fn initialize(&mut self) {
        let applied = self.applied;
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.show(applied);
        }
    }

    /// Flip the theme, update the glyph and persist the choice.
    ///
    /// Returns the new theme, or `None` when there is no toggle control. The
    /// theme stays applied even if the cookie cannot be written.
    pub fn toggle(&mut self) -> Result<Option<Theme>> {
        let Some(toggle) = self.toggle.as_mut() else {
            return Ok(None);
        };

        let next = self.applied.opposite();
        self.applied = next;
        toggle.show(next);
        tracing::debug!(target: "lingochat.theme", theme = %next, "theme toggled");

        self.store
            .set(THEME_COOKIE, &ThemeCookie::new(next).to_set_cookie())?;
        Ok(Some(next))
    }

    pub fn theme(&self) -> Theme {
        self.applied
    }

    pub fn toggle_control(&self) -> Option<&ThemeToggle> {
        self.toggle.as_ref()
    }

    /// The cookie value currently persisted, if any.
    pub fn persisted(&self) -> Result<Option<Theme>> {
        Ok(self
            .store
            .get(THEME_COOKIE)?
            .and_then(|raw| ThemeCookie::parse(&raw))
            .map(|cookie| cookie.theme))
    }
}
