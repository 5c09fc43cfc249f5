// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for lingochat
//!
//! Handles loading and saving settings from ~/.lingochat/settings.json

use serde::{Deserialize, Serialize};

use crate::session::{Language, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
use crate::theme::Theme;

mod io;
mod validation;

/// Main settings structure, stored in ~/.lingochat/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Chat backend connection
    #[serde(default)]
    pub server: ServerConfig,

    /// Identity sent with every message
    #[serde(default)]
    pub session: SessionConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Chat backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the backend (scheme, host, port)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path messages are posted to
    #[serde(default = "default_message_path")]
    pub message_path: String,

    /// Optional request timeout. Requests wait indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Login fields used to build the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_first_name")]
    pub first_name: String,

    #[serde(default = "default_last_name")]
    pub last_name: String,

    #[serde(default)]
    pub language: Language,
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Show the theme toggle in the title bar
    #[serde(default = "default_true")]
    pub theme_toggle: bool,

    /// Theme used when no theme cookie has been written yet
    #[serde(default)]
    pub default_theme: Theme,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            message_path: default_message_path(),
            request_timeout_secs: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            last_name: default_last_name(),
            language: Language::default(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme_toggle: true,
            default_theme: Theme::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_message_path() -> String {
    "/chat/message".to_string()
}

fn default_first_name() -> String {
    DEFAULT_FIRST_NAME.to_string()
}

fn default_last_name() -> String {
    DEFAULT_LAST_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.server.message_path, "/chat/message");
        assert!(settings.server.request_timeout_secs.is_none());
        assert_eq!(settings.session.first_name, "Anonymous");
        assert_eq!(settings.session.last_name, "User");
        assert_eq!(settings.session.language, Language::English);
        assert!(settings.appearance.theme_toggle);
        assert_eq!(settings.appearance.default_theme, Theme::Light);
    }

    #[test]
    fn test_settings_partial_json_fills_defaults() {
        let json = r#"{"server": {"base_url": "http://chat.local"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server.base_url, "http://chat.local");
        assert_eq!(settings.server.message_path, "/chat/message");
        assert_eq!(settings.session.first_name, "Anonymous");
    }

    #[test]
    fn test_settings_language_and_theme_from_json() {
        let json = r#"{
            "session": {"first_name": "Maral", "language": "tk"},
            "appearance": {"theme_toggle": false, "default_theme": "dark"}
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.session.language, Language::Turkmen);
        assert_eq!(settings.session.last_name, "User");
        assert!(!settings.appearance.theme_toggle);
        assert_eq!(settings.appearance.default_theme, Theme::Dark);
    }

    #[test]
    fn test_timeout_skipped_when_unset() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert!(json["server"].get("request_timeout_secs").is_none());
    }
}
