// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Non-interactive commands

use crate::chat::{ChatEntry, SubmitOutcome};
use crate::error::{LingoError, Result};
use crate::theme::Theme;

use super::args::{AskArgs, ThemeArgs};
use super::runtime::Runtime;

/// What a one-shot `ask` produced
#[derive(Debug, Clone)]
pub struct AskReport {
    /// The AI entry appended for the submission
    pub reply: ChatEntry,
    /// Set when the reply is a placeholder or server detail instead of an answer
    pub error: Option<String>,
}

impl AskReport {
    pub fn is_reply(&self) -> bool {
        self.error.is_none()
    }
}

/// Submit one message through a fresh controller and wait for its answer.
pub async fn run_ask(runtime: &Runtime, args: &AskArgs) -> Result<AskReport> {
    let (mut chat, mut events) = runtime.chat_controller();

    if let Some(path) = &args.file {
        chat.attach_path(path).await?;
    }
    chat.composer_mut().input.set_text(&args.text);

    match chat.submit() {
        SubmitOutcome::Sent { seq, .. } => {
            tracing::debug!(target: "lingochat.chat", seq, "ask submitted");
        }
        SubmitOutcome::Empty => {
            return Err(LingoError::InvalidInput(
                "nothing to send: give some text or --file".to_string(),
            ));
        }
        SubmitOutcome::Busy { waiting_for } => {
            return Err(LingoError::InvalidInput(format!(
                "request {} is still pending",
                waiting_for
            )));
        }
    }

    let reply = chat
        .settle(&mut events)
        .await
        .cloned()
        .ok_or_else(|| LingoError::Tui("request task ended without an answer".to_string()))?;

    Ok(AskReport {
        reply,
        error: chat.last_error().map(str::to_string),
    })
}

/// Report the saved theme, toggling it first when asked.
pub fn run_theme(runtime: &Runtime, args: &ThemeArgs) -> Result<Theme> {
    let mut controller = runtime.theme_controller();
    controller.initialize();
    if args.toggle && controller.toggle()?.is_none() {
        return Err(LingoError::Config(
            "theme toggle is disabled (appearance.theme_toggle = false)".to_string(),
        ));
    }
    Ok(controller.theme())
}
