// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Key bindings
//!
//! Translates key events into [`ChatAction`]s. The app applies actions, so
//! tests can drive it with actions or with synthetic key events alike.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which part of the screen has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Typing a message
    Input,
    /// Typing the path of a file to attach
    PickFile,
    /// Scrolling the history
    Scroll,
    /// Help overlay
    Help,
}

/// Everything a key can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Submit,
    InsertChar(char),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    ClearLine,
    OpenFilePicker,
    ConfirmFile,
    CancelFilePicker,
    ClearAttachment,
    ToggleTheme,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    EnterScroll,
    EnterInput,
    ShowHelp,
    CloseHelp,
    Quit,
}

/// Key binding description for help display
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Map a key event to an action for the given mode.
pub fn action_for(mode: ChatMode, key: KeyEvent) -> Option<ChatAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global keys that work in any mode.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(ChatAction::Quit),
            KeyCode::Char('t') => return Some(ChatAction::ToggleTheme),
            _ => {}
        }
    }

    match mode {
        ChatMode::Help => Some(ChatAction::CloseHelp),
        ChatMode::Input => input_action(key),
        ChatMode::PickFile => file_prompt_action(key),
        ChatMode::Scroll => scroll_action(key),
    }
}

fn editing_action(key: KeyEvent) -> Option<ChatAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => Some(ChatAction::MoveHome),
            KeyCode::Char('e') => Some(ChatAction::MoveEnd),
            KeyCode::Char('u') => Some(ChatAction::ClearLine),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(ChatAction::InsertChar(c)),
        KeyCode::Backspace => Some(ChatAction::Backspace),
        KeyCode::Delete => Some(ChatAction::Delete),
        KeyCode::Left => Some(ChatAction::MoveLeft),
        KeyCode::Right => Some(ChatAction::MoveRight),
        KeyCode::Home => Some(ChatAction::MoveHome),
        KeyCode::End => Some(ChatAction::MoveEnd),
        _ => None,
    }
}

fn input_action(key: KeyEvent) -> Option<ChatAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('o') => return Some(ChatAction::OpenFilePicker),
            KeyCode::Char('x') => return Some(ChatAction::ClearAttachment),
            _ => {}
        }
    }
    match key.code {
        KeyCode::Enter => Some(ChatAction::Submit),
        KeyCode::Esc => Some(ChatAction::EnterScroll),
        KeyCode::PageUp => Some(ChatAction::PageUp),
        KeyCode::PageDown => Some(ChatAction::PageDown),
        KeyCode::F(1) => Some(ChatAction::ShowHelp),
        _ => editing_action(key),
    }
}

fn file_prompt_action(key: KeyEvent) -> Option<ChatAction> {
    match key.code {
        KeyCode::Enter => Some(ChatAction::ConfirmFile),
        KeyCode::Esc => Some(ChatAction::CancelFilePicker),
        _ => editing_action(key),
    }
}

fn scroll_action(key: KeyEvent) -> Option<ChatAction> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(ChatAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ChatAction::ScrollUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(ChatAction::PageDown),
        KeyCode::PageUp => Some(ChatAction::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(ChatAction::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(ChatAction::ScrollBottom),
        KeyCode::Char('i') | KeyCode::Enter | KeyCode::Esc => Some(ChatAction::EnterInput),
        KeyCode::Char('?') | KeyCode::F(1) => Some(ChatAction::ShowHelp),
        KeyCode::Char('q') => Some(ChatAction::Quit),
        _ => None,
    }
}

/// Get key bindings for a given mode
pub fn bindings_for_mode(mode: ChatMode) -> Vec<KeyBinding> {
    let binding = |keys: &'static str, description: &'static str| KeyBinding { keys, description };
    match mode {
        ChatMode::Input => vec![
            binding("Enter", "Send"),
            binding("Ctrl+O", "Attach file"),
            binding("Ctrl+X", "Remove file"),
            binding("Ctrl+T", "Theme"),
            binding("Esc", "Scroll"),
            binding("F1", "Help"),
            binding("Ctrl+C", "Quit"),
        ],
        ChatMode::PickFile => vec![
            binding("Enter", "Attach"),
            binding("Esc", "Cancel"),
        ],
        ChatMode::Scroll => vec![
            binding("j/k", "Scroll"),
            binding("g/G", "Top/Bottom"),
            binding("i", "Type"),
            binding("q", "Quit"),
        ],
        ChatMode::Help => vec![binding("any key", "Close help")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_keys() {
        for mode in [ChatMode::Input, ChatMode::PickFile, ChatMode::Scroll, ChatMode::Help] {
            assert_eq!(action_for(mode, ctrl('c')), Some(ChatAction::Quit));
            assert_eq!(action_for(mode, ctrl('t')), Some(ChatAction::ToggleTheme));
        }
    }

    #[test]
    fn test_input_mode() {
        assert_eq!(action_for(ChatMode::Input, key(KeyCode::Enter)), Some(ChatAction::Submit));
        assert_eq!(action_for(ChatMode::Input, ctrl('o')), Some(ChatAction::OpenFilePicker));
        assert_eq!(action_for(ChatMode::Input, ctrl('x')), Some(ChatAction::ClearAttachment));
        assert_eq!(
            action_for(ChatMode::Input, key(KeyCode::Char('q'))),
            Some(ChatAction::InsertChar('q'))
        );
        assert_eq!(
            action_for(ChatMode::Input, KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(ChatAction::InsertChar('Q'))
        );
    }

    #[test]
    fn test_file_prompt_mode() {
        assert_eq!(
            action_for(ChatMode::PickFile, key(KeyCode::Enter)),
            Some(ChatAction::ConfirmFile)
        );
        assert_eq!(
            action_for(ChatMode::PickFile, key(KeyCode::Esc)),
            Some(ChatAction::CancelFilePicker)
        );
        assert_eq!(
            action_for(ChatMode::PickFile, key(KeyCode::Char('/'))),
            Some(ChatAction::InsertChar('/'))
        );
        assert_eq!(action_for(ChatMode::PickFile, ctrl('o')), None);
    }

    #[test]
    fn test_scroll_mode() {
        assert_eq!(action_for(ChatMode::Scroll, key(KeyCode::Char('j'))), Some(ChatAction::ScrollDown));
        assert_eq!(action_for(ChatMode::Scroll, key(KeyCode::Char('G'))), Some(ChatAction::ScrollBottom));
        assert_eq!(action_for(ChatMode::Scroll, key(KeyCode::Char('q'))), Some(ChatAction::Quit));
        assert_eq!(action_for(ChatMode::Scroll, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_help_mode_any_key_closes() {
        assert_eq!(action_for(ChatMode::Help, key(KeyCode::Char('x'))), Some(ChatAction::CloseHelp));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(ChatMode::Input, release), None);
    }

    #[test]
    fn test_bindings_nonempty() {
        for mode in [ChatMode::Input, ChatMode::PickFile, ChatMode::Scroll, ChatMode::Help] {
            assert!(!bindings_for_mode(mode).is_empty());
        }
    }
}
