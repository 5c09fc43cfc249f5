// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat backend abstraction and the HTTP implementation
//!
//! A message without an attachment is posted as JSON; with an attachment it
//! becomes a multipart form carrying the same fields plus a `file` part.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{BackendError, LingoError, Result};

use super::message::OutgoingMessage;

/// Something that answers chat messages
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Send one message and wait for the single answer.
    ///
    /// `Ok` carries the reply text. A non-success answer from the server is
    /// `BackendError::Rejected`; anything else is a transport failure.
    async fn send(&self, message: OutgoingMessage) -> std::result::Result<String, BackendError>;
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
    user_name: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct ReplyBody {
    response: String,
}

/// Posts messages to the backend's message endpoint
pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    /// Create a backend posting to `url`.
    ///
    /// Without a timeout a request waits until the server answers. The
    /// optional jar supplies cookies (the theme preference) with every request.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>, jar: Option<Arc<Jar>>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(jar) = jar {
            builder = builder.cookie_provider(jar);
        }
        let client = builder.build().map_err(LingoError::Http)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_settings(settings: &Settings, jar: Option<Arc<Jar>>) -> Result<Self> {
        Self::new(settings.message_url(), settings.request_timeout(), jar)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_form(message: OutgoingMessage) -> std::result::Result<Form, BackendError> {
        let form = Form::new()
            .text("message", message.message_field().to_string())
            .text("user_name", message.sender_name)
            .text("language", message.language);

        match message.attachment {
            Some(attachment) => {
                let mime = attachment.mime_type();
                let part = Part::bytes(attachment.bytes)
                    .file_name(attachment.filename)
                    .mime_str(mime)
                    .map_err(|e| BackendError::Network(format!("invalid attachment type: {}", e)))?;
                Ok(form.part("file", part))
            }
            None => Ok(form),
        }
    }
}

/// Pull a string `detail` out of an error body, if there is one.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: OutgoingMessage) -> std::result::Result<String, BackendError> {
        let request = self.client.post(&self.url);
        let request = if message.attachment.is_some() {
            request.multipart(Self::build_form(message)?)
        } else {
            request.json(&MessageBody {
                message: message.message_field(),
                user_name: &message.sender_name,
                language: &message.language,
            })
        };

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ReplyBody = response
                .json()
                .await
                .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
            Ok(body.response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(BackendError::Rejected {
                status: status.as_u16(),
                detail: error_detail(&body),
            })
        }
    }
}
