// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::lingochat_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the lingochat home directory (~/.lingochat or $LINGOCHAT_HOME).
    pub fn lingochat_home() -> PathBuf {
        if let Ok(home) = std::env::var("LINGOCHAT_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lingochat")
    }

    /// Server base URL from $LINGOCHAT_SERVER, if set.
    pub fn server_from_env() -> Option<String> {
        std::env::var("LINGOCHAT_SERVER").ok()
    }

    /// Directory holding persisted cookies.
    pub fn cookies_dir() -> PathBuf {
        Self::lingochat_home().join("cookies")
    }

    /// Log file used while the TUI owns the terminal.
    pub fn log_path() -> PathBuf {
        Self::lingochat_home().join("lingochat.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Language;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp.path().join("missing.json")).unwrap();
        assert_eq!(settings.server.message_path, "/chat/message");
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.session.first_name = "Oleg".to_string();
        settings.session.language = Language::Russian;
        settings.server.request_timeout_secs = Some(30);
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.session.first_name, "Oleg");
        assert_eq!(loaded.session.language, Language::Russian);
        assert_eq!(loaded.server.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_base_url() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"server": {"base_url": "chat.local"}}"#).unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }
}
