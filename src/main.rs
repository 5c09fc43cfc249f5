// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! lingochat - terminal chat client
//!
//! Entry point for the lingochat CLI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;

use lingochat::cli::{run_ask, run_theme, Cli, Commands, Runtime};
use lingochat::config::Settings;
use lingochat::error::Result;
use lingochat::tui::{app::ChatApp, run_chat_tui};

fn init_tracing(verbose: u8, to_log_file: bool) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on our own targets; RUST_LOG still wins for anything it names.
    if verbose > 0 {
        for directive in [
            "lingochat.chat=debug",
            "lingochat.tui=debug",
            "lingochat.theme=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    // The TUI owns the terminal, so its logs go to a file.
    if to_log_file {
        let path = Settings::log_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Chat));
    init_tracing(cli.verbose, interactive);

    let settings = cli.load_settings()?;
    let runtime = Runtime::build(settings, &Settings::cookies_dir())?;

    match &cli.command {
        None | Some(Commands::Chat) => {
            let (chat, events) = runtime.chat_controller();
            let app = ChatApp::new(chat, runtime.theme_controller(), events);
            run_chat_tui(app).await?;
        }
        Some(Commands::Ask(args)) => {
            let report = run_ask(&runtime, args).await?;
            println!("{}", report.reply.text);
            if let Some(error) = &report.error {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
        Some(Commands::Theme(args)) => {
            let theme = run_theme(&runtime, args)?;
            println!("{} {}", theme.glyph(), theme);
        }
    }

    Ok(())
}
