// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat TUI application state
//!
//! Wires key events and request events to the chat and theme controllers.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::chat::{ChatController, ChatEvent, EventReceiver, TextInput};
use crate::error::Result;
use crate::theme::ThemeController;

use super::keymap::{action_for, ChatAction, ChatMode};
use super::palette::Palette;
use super::scroll::ScrollState;

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Quit,
}

pub struct ChatApp {
    pub chat: ChatController,
    pub theme: ThemeController,
    event_rx: EventReceiver,
    pub mode: ChatMode,
    /// Path being typed while picking a file
    pub file_prompt: TextInput,
    pub scroll: ScrollState,
    /// History height in lines at the last draw
    history_height: usize,
    seen_revision: u64,
    pub should_quit: bool,
}

impl ChatApp {
    pub fn new(chat: ChatController, mut theme: ThemeController, event_rx: EventReceiver) -> Self {
        theme.initialize();
        Self {
            chat,
            theme,
            event_rx,
            mode: ChatMode::Input,
            file_prompt: TextInput::new(),
            scroll: ScrollState::new(),
            history_height: 0,
            seen_revision: 0,
            should_quit: false,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme.theme())
    }

    /// Wait briefly for a request event, then poll the keyboard once.
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        tokio::select! {
            true = self.next_event() => {}
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }

        if crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                self.handle_key(key).await?;
            }
        }

        Ok(if self.should_quit {
            TickResult::Quit
        } else {
            TickResult::Continue
        })
    }

    pub fn handle_event(&mut self, event: ChatEvent) {
        self.chat.handle_event(event);
    }

    /// Wait for the next request event and apply it. False once every sender is gone.
    pub async fn next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = action_for(self.mode, key) {
            self.apply(action).await?;
        }
        Ok(())
    }

    fn active_input(&mut self) -> &mut TextInput {
        match self.mode {
            ChatMode::PickFile => &mut self.file_prompt,
            _ => &mut self.chat.composer_mut().input,
        }
    }

    pub async fn apply(&mut self, action: ChatAction) -> Result<()> {
        match action {
            ChatAction::Submit => {
                self.chat.dismiss_notices();
                self.chat.submit();
            }
            ChatAction::InsertChar(c) => self.active_input().insert_char(c),
            ChatAction::Backspace => self.active_input().backspace(),
            ChatAction::Delete => self.active_input().delete(),
            ChatAction::MoveLeft => self.active_input().move_left(),
            ChatAction::MoveRight => self.active_input().move_right(),
            ChatAction::MoveHome => self.active_input().move_home(),
            ChatAction::MoveEnd => self.active_input().move_end(),
            ChatAction::ClearLine => self.active_input().clear(),

            ChatAction::OpenFilePicker => {
                self.file_prompt.clear();
                self.mode = ChatMode::PickFile;
            }
            ChatAction::ConfirmFile => self.confirm_file().await,
            ChatAction::CancelFilePicker => self.mode = ChatMode::Input,
            ChatAction::ClearAttachment => self.chat.clear_attachment(),

            ChatAction::ToggleTheme => match self.theme.toggle() {
                Ok(Some(theme)) => self.chat.set_status(format!("Theme: {}", theme)),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(target: "lingochat.tui", error = %e, "theme cookie not saved");
                    self.chat.report_error(format!("Theme not saved: {}", e));
                }
            },

            ChatAction::ScrollUp => self.scroll.scroll_up(1),
            ChatAction::ScrollDown => self.scroll.scroll_down(1, self.history_height),
            ChatAction::PageUp => {
                let page = self.scroll.page_size();
                self.scroll.scroll_up(page);
            }
            ChatAction::PageDown => {
                let page = self.scroll.page_size();
                self.scroll.scroll_down(page, self.history_height);
            }
            ChatAction::ScrollTop => self.scroll.scroll_to_top(),
            ChatAction::ScrollBottom => self.scroll.scroll_to_end(),

            ChatAction::EnterScroll => self.mode = ChatMode::Scroll,
            ChatAction::EnterInput => self.mode = ChatMode::Input,
            ChatAction::ShowHelp => self.mode = ChatMode::Help,
            ChatAction::CloseHelp => self.mode = ChatMode::Input,
            ChatAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    async fn confirm_file(&mut self) {
        let raw = self.file_prompt.text().trim().to_string();
        if raw.is_empty() {
            self.mode = ChatMode::Input;
            return;
        }

        let path = expand_home(&raw);
        match self.chat.attach_path(&path).await {
            Ok(()) => {
                self.file_prompt.clear();
                self.mode = ChatMode::Input;
            }
            Err(e) => {
                tracing::debug!(target: "lingochat.tui", path = %path.display(), error = %e, "attach failed");
                self.chat
                    .report_error(format!("Cannot attach {}: {}", path.display(), e));
            }
        }
    }

    /// Fit scrolling to the drawn history; jumps to the end after any append.
    pub(crate) fn sync_scroll(&mut self, viewport_height: u16, history_height: usize) {
        let revision = self.chat.revision();
        if revision != self.seen_revision {
            self.seen_revision = revision;
            self.scroll.scroll_to_end();
        }
        self.history_height = history_height;
        self.scroll.layout(viewport_height, history_height);
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::chat::mock_backend::{MockBackend, MockReply};
    use crate::chat::{create_event_channel, Sender};
    use crate::session::Session;
    use crate::theme::{MemoryCookieStore, Theme, ThemeToggle};

    fn app_with(backend: MockBackend) -> ChatApp {
        let (tx, rx) = create_event_channel();
        let chat = ChatController::new(Session::default(), Arc::new(backend), tx);
        let theme = ThemeController::new(
            Theme::Light,
            Some(ThemeToggle::new()),
            Arc::new(MemoryCookieStore::new()),
        );
        ChatApp::new(chat, theme, rx)
    }

    async fn type_text(app: &mut ChatApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_new_initializes_theme_glyph() {
        let app = app_with(MockBackend::new());
        assert_eq!(
            app.theme.toggle_control().unwrap().glyph(),
            Theme::Light.glyph()
        );
    }

    #[tokio::test]
    async fn test_type_and_submit() {
        let mut app = app_with(MockBackend::with_replies([MockReply::Reply(
            "Privet!".to_string(),
        )]));
        type_text(&mut app, "hello").await;
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .unwrap();

        assert_eq!(app.chat.history().len(), 1);
        assert!(app.chat.composer().input.is_empty());

        assert!(app.next_event().await);
        let last = app.chat.history().last().unwrap();
        assert_eq!(last.sender, Sender::Ai);
        assert_eq!(last.text, "Privet!");
    }

    #[tokio::test]
    async fn test_pick_file_flow() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let mut app = app_with(MockBackend::new());
        app.apply(ChatAction::OpenFilePicker).await.unwrap();
        assert_eq!(app.mode, ChatMode::PickFile);
        type_text(&mut app, path.to_str().unwrap()).await;
        assert!(app.chat.composer().input.is_empty());

        app.apply(ChatAction::ConfirmFile).await.unwrap();
        assert_eq!(app.mode, ChatMode::Input);
        assert_eq!(app.chat.composer().preview_label(), Some("cv.pdf"));

        app.apply(ChatAction::ClearAttachment).await.unwrap();
        assert_eq!(app.chat.composer().preview_label(), None);
    }

    #[tokio::test]
    async fn test_pick_missing_file_reports_error() {
        let mut app = app_with(MockBackend::new());
        app.apply(ChatAction::OpenFilePicker).await.unwrap();
        type_text(&mut app, "/definitely/not/here.txt").await;
        app.apply(ChatAction::ConfirmFile).await.unwrap();

        assert_eq!(app.mode, ChatMode::PickFile);
        assert!(app.chat.last_error().unwrap().contains("Cannot attach"));
        assert!(app.chat.composer().selected_file().is_none());
    }

    #[tokio::test]
    async fn test_empty_file_prompt_cancels() {
        let mut app = app_with(MockBackend::new());
        app.apply(ChatAction::OpenFilePicker).await.unwrap();
        app.apply(ChatAction::ConfirmFile).await.unwrap();
        assert_eq!(app.mode, ChatMode::Input);
    }

    #[tokio::test]
    async fn test_toggle_theme_twice() {
        let mut app = app_with(MockBackend::new());
        app.apply(ChatAction::ToggleTheme).await.unwrap();
        assert_eq!(app.theme.theme(), Theme::Dark);
        assert_eq!(app.palette(), Palette::for_theme(Theme::Dark));
        app.apply(ChatAction::ToggleTheme).await.unwrap();
        assert_eq!(app.theme.theme(), Theme::Light);
        assert_eq!(app.theme.persisted().unwrap(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_sync_scroll_jumps_to_end_after_append() {
        let mut app = app_with(MockBackend::new());
        app.sync_scroll(5, 40);
        app.apply(ChatAction::ScrollTop).await.unwrap();
        app.sync_scroll(5, 40);
        assert_eq!(app.scroll.scroll_offset, 0);

        type_text(&mut app, "more").await;
        app.apply(ChatAction::Submit).await.unwrap();
        app.sync_scroll(5, 44);
        assert_eq!(app.scroll.scroll_offset, 39);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = app_with(MockBackend::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.tick().await.unwrap(), TickResult::Quit);
    }

    #[tokio::test]
    async fn test_next_event_settles_request() {
        let mut app = app_with(MockBackend::new());
        type_text(&mut app, "hi").await;
        app.apply(ChatAction::Submit).await.unwrap();
        assert!(app.chat.is_waiting());

        assert!(app.next_event().await);
        assert!(!app.chat.is_waiting());
        assert_eq!(app.chat.history().len(), 2);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/a.txt"), PathBuf::from("/tmp/a.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/a.txt"), home.join("a.txt"));
        }
    }
}
