// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shared setup for every command: cookies, backend and controllers.

use std::path::Path;
use std::sync::Arc;

use reqwest::cookie::Jar;

use crate::chat::{create_event_channel, ChatBackend, ChatController, EventReceiver, HttpBackend};
use crate::config::Settings;
use crate::error::Result;
use crate::session::Session;
use crate::theme::{
    load_initial_theme, CookieStore, FileCookieStore, SharedCookieStore, ThemeController,
    ThemeToggle, THEME_COOKIE,
};

pub struct Runtime {
    pub settings: Settings,
    pub session: Session,
    pub backend: Arc<dyn ChatBackend>,
    pub cookies: Arc<dyn CookieStore>,
}

impl Runtime {
    /// Build the HTTP runtime. Cookies persist under `cookie_dir` and are
    /// shared with the HTTP client so the server sees the theme cookie.
    pub fn build(settings: Settings, cookie_dir: &Path) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let files: Arc<dyn CookieStore> = Arc::new(FileCookieStore::new(cookie_dir));
        let shared = SharedCookieStore::new(files, Arc::clone(&jar), &settings.server.base_url)?;
        shared.preload(THEME_COOKIE)?;

        let backend = HttpBackend::from_settings(&settings, Some(jar))?;
        tracing::debug!(target: "lingochat.chat", url = backend.url(), "http backend ready");

        Ok(Self::with_backend(settings, Arc::new(backend), Arc::new(shared)))
    }

    pub fn with_backend(
        settings: Settings,
        backend: Arc<dyn ChatBackend>,
        cookies: Arc<dyn CookieStore>,
    ) -> Self {
        let session = settings.session();
        Self {
            settings,
            session,
            backend,
            cookies,
        }
    }

    /// A controller and the receiver its request tasks report to.
    pub fn chat_controller(&self) -> (ChatController, EventReceiver) {
        let (tx, rx) = create_event_channel();
        let chat = ChatController::new(self.session.clone(), Arc::clone(&self.backend), tx);
        (chat, rx)
    }

    /// Theme controller starting from the saved cookie, else the configured default.
    pub fn theme_controller(&self) -> ThemeController {
        let appearance = &self.settings.appearance;
        let applied = load_initial_theme(self.cookies.as_ref(), appearance.default_theme);
        let toggle = appearance.theme_toggle.then(ThemeToggle::new);
        ThemeController::new(applied, toggle, Arc::clone(&self.cookies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::mock_backend::MockBackend;
    use crate::theme::{MemoryCookieStore, Theme, ThemeCookie};

    #[test]
    fn test_theme_controller_uses_saved_cookie() {
        let cookies = MemoryCookieStore::new();
        cookies
            .set(THEME_COOKIE, &ThemeCookie::new(Theme::Dark).to_set_cookie())
            .unwrap();
        let runtime = Runtime::with_backend(
            Settings::default(),
            Arc::new(MockBackend::new()),
            Arc::new(cookies),
        );
        assert_eq!(runtime.theme_controller().theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_controller_without_toggle() {
        let mut settings = Settings::default();
        settings.appearance.theme_toggle = false;
        let runtime = Runtime::with_backend(
            settings,
            Arc::new(MockBackend::new()),
            Arc::new(MemoryCookieStore::new()),
        );
        let theme = runtime.theme_controller();
        assert_eq!(theme.theme(), Theme::Light);
        assert!(theme.toggle_control().is_none());
    }

    #[test]
    fn test_build_http_runtime() {
        let temp = tempfile::TempDir::new().unwrap();
        let runtime = Runtime::build(Settings::default(), temp.path()).unwrap();
        assert_eq!(runtime.backend.name(), "http");
        assert_eq!(runtime.session.user_name(), "Anonymous User");
    }
}
