// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock chat backend for testing
//!
//! Replays scripted answers and records every message it receives, so the
//! controller can be exercised without a server.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::BackendError;

use super::backend::ChatBackend;
use super::message::OutgoingMessage;

/// A scripted answer
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Success with this reply text
    Reply(String),
    /// Error status, optionally with a `detail`
    Rejected { status: u16, detail: Option<String> },
    /// Connection-level failure
    Network(String),
    /// Success status with an unreadable body
    Malformed(String),
}

impl MockReply {
    fn into_result(self) -> Result<String, BackendError> {
        match self {
            MockReply::Reply(text) => Ok(text),
            MockReply::Rejected { status, detail } => Err(BackendError::Rejected { status, detail }),
            MockReply::Network(msg) => Err(BackendError::Network(msg)),
            MockReply::Malformed(msg) => Err(BackendError::InvalidResponse(msg)),
        }
    }
}

/// A mock backend for tests
#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    recorded: Arc<Mutex<Vec<OutgoingMessage>>>,
    call_count: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers, returned in order. Once exhausted every call gets "mock reply".
    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Self {
        let backend = Self::new();
        if let Ok(mut queue) = backend.replies.lock() {
            queue.extend(replies);
        }
        backend
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<OutgoingMessage> {
        self.recorded
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, message: OutgoingMessage) -> Result<String, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(message);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.replies.lock().ok().and_then(|mut q| q.pop_front());
        next.unwrap_or_else(|| MockReply::Reply("mock reply".to_string()))
            .into_result()
    }
}
