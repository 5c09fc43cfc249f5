// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use crate::error::{LingoError, Result};
use crate::session::Session;

use super::Settings;

impl Settings {
    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        let base = self.server.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(LingoError::Config(format!(
                "server.base_url must start with http:// or https://, got '{}'",
                self.server.base_url
            )));
        }
        if !self.server.message_path.starts_with('/') {
            return Err(LingoError::Config(format!(
                "server.message_path must start with '/', got '{}'",
                self.server.message_path
            )));
        }
        if self.server.request_timeout_secs == Some(0) {
            return Err(LingoError::Config(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the base URL when a value is given. Callers validate afterwards.
    pub fn apply_server_override(&mut self, value: Option<String>) {
        if let Some(server) = value {
            let server = server.trim();
            if !server.is_empty() {
                self.server.base_url = server.trim_end_matches('/').to_string();
            }
        }
    }

    /// Full URL messages are posted to.
    pub fn message_url(&self) -> String {
        format!(
            "{}{}",
            self.server.base_url.trim_end_matches('/'),
            self.server.message_path
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.server.request_timeout_secs.map(Duration::from_secs)
    }

    /// Build the read-only session from the login fields.
    pub fn session(&self) -> Session {
        Session::new(
            &self.session.first_name,
            &self.session.last_name,
            self.session.language,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_message_path() {
        let mut settings = Settings::default();
        settings.server.message_path = "chat/message".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("message_path"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut settings = Settings::default();
        settings.server.request_timeout_secs = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_message_url_joins_without_double_slash() {
        let mut settings = Settings::default();
        settings.server.base_url = "http://localhost:9000/".to_string();
        assert_eq!(settings.message_url(), "http://localhost:9000/chat/message");
    }

    #[test]
    fn test_server_override_is_validated() {
        let mut settings = Settings::default();
        settings.apply_server_override(Some("ftp://files.local".to_string()));
        assert_eq!(settings.server.base_url, "ftp://files.local");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_server_override_is_ignored() {
        let mut settings = Settings::default();
        settings.apply_server_override(Some("  ".to_string()));
        settings.apply_server_override(None);
        assert_eq!(settings.server.base_url, Settings::default().server.base_url);
    }

    #[test]
    fn test_request_timeout() {
        let mut settings = Settings::default();
        assert!(settings.request_timeout().is_none());
        settings.server.request_timeout_secs = Some(5);
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_session_from_settings() {
        let mut settings = Settings::default();
        settings.session.first_name = "Gozel".to_string();
        settings.session.last_name = "".to_string();
        assert_eq!(settings.session().user_name(), "Gozel User");
    }
}
