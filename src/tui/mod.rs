// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal chat interface
//!
//! Renders the conversation with ratatui and reads keys through crossterm.

pub mod app;
pub mod keymap;
pub mod palette;
pub mod scroll;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::{LingoError, Result};
use app::{ChatApp, TickResult};

fn tui_err(e: impl std::fmt::Display) -> LingoError {
    LingoError::Tui(e.to_string())
}

/// Run the chat screen until the user quits
pub async fn run_chat_tui(mut app: ChatApp) -> Result<()> {
    // Restore the terminal if anything panics while it is in raw mode
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(tui_err)?;

    let result = run_app(&mut terminal, &mut app).await;

    let _ = std::panic::take_hook();
    disable_raw_mode().map_err(tui_err)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(tui_err)?;
    terminal.show_cursor().map_err(tui_err)?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ChatApp,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app)).map_err(tui_err)?;
        if app.tick().await? == TickResult::Quit {
            tracing::debug!(target: "lingochat.tui", "quit requested");
            return Ok(());
        }
    }
}
