// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for lingochat
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for lingochat operations
#[derive(Error, Debug)]
pub enum LingoError {
    /// Chat backend errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Failures talking to the chat backend.
///
/// `Rejected` is an application-level answer (the server replied with an
/// error status); every other variant is a transport failure.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// Success status but the body could not be understood
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    /// Server answered with a non-success status
    #[error("Backend rejected message ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}


impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::InvalidResponse(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// Result type alias for lingochat operations
pub type Result<T> = std::result::Result<T, LingoError>;
