// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session identity
//!
//! The display name and preferred language are fixed when the client starts
//! and are sent with every message. They are read-only for the rest of the
//! session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LingoError;

pub const DEFAULT_FIRST_NAME: &str = "Anonymous";
pub const DEFAULT_LAST_NAME: &str = "User";

/// Languages the backend answers in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "ru")]
    Russian,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tk")]
    Turkmen,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Russian, Language::English, Language::Turkmen];

    /// Short code used in settings and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
            Language::Turkmen => "tk",
        }
    }

    /// Full name, which is the value the backend expects
    pub fn name(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::English => "English",
            Language::Turkmen => "Turkmen",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LingoError;

    /// Accepts either the code (`en`) or the full name (`English`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(needle) || lang.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                LingoError::InvalidInput(format!(
                    "unknown language '{}' (expected one of: ru, en, tk)",
                    needle
                ))
            })
    }
}

/// Read-only values attached to every outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_name: String,
    language: Language,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME, Language::default())
    }
}

impl Session {
    /// Build a session from the login fields.
    ///
    /// Blank name parts fall back to the anonymous defaults; the joined name is
    /// trimmed so a single given name does not carry a trailing space.
    pub fn new(first_name: &str, last_name: &str, language: Language) -> Self {
        let first = non_blank_or(first_name, DEFAULT_FIRST_NAME);
        let last = non_blank_or(last_name, DEFAULT_LAST_NAME);
        Self {
            user_name: format!("{} {}", first, last).trim().to_string(),
            language,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
