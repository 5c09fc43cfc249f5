// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Outgoing message payload

use std::path::Path;

use crate::error::{LingoError, Result};
use crate::session::Session;

/// A single file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                LingoError::InvalidInput(format!("'{}' is not a file", path.display()))
            })?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { filename, bytes })
    }

    /// MIME type guessed from the extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.filename)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => "application/pdf",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "txt" | "md" => "text/plain",
            "csv" => "text/csv",
            "json" => "application/json",
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            _ => "application/octet-stream",
        }
    }
}

/// Everything sent for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: Option<String>,
    pub attachment: Option<Attachment>,
    pub sender_name: String,
    pub language: String,
}

impl OutgoingMessage {
    /// Build a message, trimming the text.
    ///
    /// Returns `None` when there is neither text nor an attachment.
    pub fn compose(text: &str, attachment: Option<Attachment>, session: &Session) -> Option<Self> {
        let trimmed = text.trim();
        let text = (!trimmed.is_empty()).then(|| trimmed.to_string());
        if text.is_none() && attachment.is_none() {
            return None;
        }
        Some(Self {
            text,
            attachment,
            sender_name: session.user_name().to_string(),
            language: session.language().name().to_string(),
        })
    }

    /// The `message` field; empty when only a file is sent.
    pub fn message_field(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
