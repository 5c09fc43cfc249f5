// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::session::Language;

/// lingochat - talk to a language tutor from your terminal
#[derive(Parser, Debug)]
#[command(name = "lingochat")]
#[command(version, about = "Terminal chat client for a language-aware AI backend")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Chat server base URL (e.g. http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// First name sent with every message
    #[arg(long, global = true)]
    pub first_name: Option<String>,

    /// Last name sent with every message
    #[arg(long, global = true)]
    pub last_name: Option<String>,

    /// Conversation language (ru, en, tk)
    #[arg(long, global = true)]
    pub language: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive chat (default when no command given)
    Chat,

    /// Send one message and print the reply
    Ask(AskArgs),

    /// Show or toggle the saved theme
    Theme(ThemeArgs),
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// Message text
    pub text: String,

    /// File to attach
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the theme subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ThemeArgs {
    /// Switch to the other theme and save it
    #[arg(long)]
    pub toggle: bool,
}

impl Cli {
    /// Load settings from `--config` (or the default path), then $LINGOCHAT_SERVER,
    /// then the flags. Later sources win.
    pub fn load_settings(&self) -> Result<Settings> {
        self.load_settings_with_env(Settings::server_from_env())
    }

    fn load_settings_with_env(&self, env_server: Option<String>) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };
        settings.apply_server_override(env_server);
        self.apply_overrides(&mut settings)?;
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut Settings) -> Result<()> {
        settings.apply_server_override(self.server.clone());
        if let Some(first) = &self.first_name {
            settings.session.first_name = first.clone();
        }
        if let Some(last) = &self.last_name {
            settings.session.last_name = last.clone();
        }
        if let Some(language) = &self.language {
            settings.session.language = language.parse::<Language>()?;
        }
        settings.validate()
    }
}
