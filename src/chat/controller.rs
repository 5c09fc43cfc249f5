// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The chat controller
//!
//! Owns the composer, the history and the session values, and runs the
//! submit loop: optimistic echo, one request, one answer appended.

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::{BackendError, Result};
use crate::session::Session;

use super::backend::ChatBackend;
use super::composer::Composer;
use super::entry::{
    attachment_notice, ChatEntry, ChatHistory, AI_ERROR_PLACEHOLDER, SERVER_ERROR_PLACEHOLDER,
};
use super::events::{send_event, ChatEvent, EventReceiver, EventSender};
use super::message::{Attachment, OutgoingMessage};

/// What a call to [`ChatController::submit`] did
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing to send; no entry appended, no request made
    Empty,
    /// A previous submission is still waiting for its answer
    Busy { waiting_for: u64 },
    /// The request is running on `task`
    Sent { seq: u64, task: JoinHandle<()> },
}

pub struct ChatController {
    composer: Composer,
    history: ChatHistory,
    session: Session,
    backend: Arc<dyn ChatBackend>,
    events: EventSender,
    next_seq: u64,
    in_flight: Option<u64>,
    status: Option<String>,
    last_error: Option<String>,
    /// Bumped on every append; the view scrolls to the end when it changes
    revision: u64,
}

impl ChatController {
    pub fn new(session: Session, backend: Arc<dyn ChatBackend>, events: EventSender) -> Self {
        Self {
            composer: Composer::new(),
            history: ChatHistory::new(),
            session,
            backend,
            events,
            next_seq: 1,
            in_flight: None,
            status: None,
            last_error: None,
            revision: 0,
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sequence number of the request still waiting for an answer.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Most recent failure, kept for the status bar.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Surface a failure that did not come from a request (bad file path, cookie write).
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn dismiss_notices(&mut self) {
        self.status = None;
        self.last_error = None;
    }

    fn append(&mut self, entry: ChatEntry) {
        self.history.push(entry);
        self.revision += 1;
    }

    /// Show a picked file in the preview region. No validation, no network.
    pub fn attach_file(&mut self, attachment: Attachment) {
        tracing::debug!(
            target: "lingochat.chat",
            file = %attachment.filename,
            bytes = attachment.bytes.len(),
            "file attached"
        );
        self.composer.attach(attachment);
    }

    /// Read `path` and attach it.
    pub async fn attach_path(&mut self, path: &Path) -> Result<()> {
        let attachment = Attachment::from_path(path).await?;
        self.attach_file(attachment);
        Ok(())
    }

    /// Empty the file control and hide the preview. Safe to call repeatedly.
    pub fn clear_attachment(&mut self) {
        self.composer.clear_attachment();
    }

    /// Submit whatever is in the composer.
    ///
    /// Everything visible happens before this returns: the echo entries are
    /// appended and the composer is emptied. The answer arrives later as a
    /// [`ChatEvent`] for [`ChatController::handle_event`].
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(message) = OutgoingMessage::compose(
            self.composer.input.text(),
            self.composer.selected_file().cloned(),
            &self.session,
        ) else {
            return SubmitOutcome::Empty;
        };

        if let Some(waiting_for) = self.in_flight {
            self.set_status("Still waiting for the previous reply");
            return SubmitOutcome::Busy { waiting_for };
        }

        if let Some(text) = &message.text {
            self.append(ChatEntry::user(text.clone()));
        }
        if let Some(attachment) = &message.attachment {
            self.append(ChatEntry::user(attachment_notice(&attachment.filename)));
        }
        self.composer.reset();

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.status = None;

        tracing::debug!(
            target: "lingochat.chat",
            seq,
            backend = self.backend.name(),
            has_text = message.text.is_some(),
            has_file = message.attachment.is_some(),
            "submitting message"
        );

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let event = match backend.send(message).await {
                Ok(text) => ChatEvent::ReplyReceived { seq, text },
                Err(BackendError::Rejected { status, detail }) => {
                    tracing::warn!(target: "lingochat.chat", seq, status, ?detail, "backend rejected message");
                    ChatEvent::ReplyRejected {
                        seq,
                        status,
                        detail,
                    }
                }
                Err(e) => {
                    tracing::error!(target: "lingochat.chat", seq, error = %e, "chat request failed");
                    ChatEvent::TransportFailed {
                        seq,
                        error: e.to_string(),
                    }
                }
            };
            send_event(&events, event);
        });

        SubmitOutcome::Sent { seq, task }
    }

    /// Apply an event from a request task.
    pub fn handle_event(&mut self, event: ChatEvent) {
        let seq = event.seq();
        if self.in_flight == Some(seq) {
            self.in_flight = None;
        } else {
            tracing::warn!(target: "lingochat.chat", seq, in_flight = ?self.in_flight, "answer for a request that is not pending");
        }

        match event {
            ChatEvent::ReplyReceived { text, .. } => {
                self.append(ChatEntry::ai(text));
            }
            ChatEvent::ReplyRejected { status, detail, .. } => {
                self.last_error = Some(format!("Backend returned {}", status));
                self.append(ChatEntry::ai(
                    detail.unwrap_or_else(|| AI_ERROR_PLACEHOLDER.to_string()),
                ));
            }
            ChatEvent::TransportFailed { error, .. } => {
                self.last_error = Some(format!("Chat error: {}", error));
                self.append(ChatEntry::ai(SERVER_ERROR_PLACEHOLDER));
            }
        }
    }

    /// Wait until the pending request settles and apply its answer.
    ///
    /// Returns the entry it appended, or `None` if nothing was pending or the
    /// channel closed.
    pub async fn settle(&mut self, events: &mut EventReceiver) -> Option<&ChatEntry> {
        self.in_flight?;
        let event = events.recv().await?;
        self.handle_event(event);
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::entry::Sender;
    use crate::chat::events::create_event_channel;
    use crate::chat::mock_backend::{MockBackend, MockReply};
    use crate::session::Language;

    fn setup(backend: MockBackend) -> (ChatController, EventReceiver) {
        let (tx, rx) = create_event_channel();
        let session = Session::new("Merjen", "Atayeva", Language::Turkmen);
        (ChatController::new(session, Arc::new(backend), tx), rx)
    }

    fn texts(controller: &ChatController) -> Vec<(Sender, String)> {
        controller
            .history()
            .entries()
            .iter()
            .map(|e| (e.sender, e.text.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_submit_empty_is_noop() {
        let backend = MockBackend::new();
        let (mut chat, _rx) = setup(backend.clone());
        chat.composer_mut().input.set_text("   ");

        assert!(matches!(chat.submit(), SubmitOutcome::Empty));
        assert!(chat.history().is_empty());
        assert_eq!(chat.composer().input.text(), "   ");
        assert!(!chat.is_waiting());
        assert_eq!(chat.revision(), 0);
        tokio::task::yield_now().await;
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_echoes_before_reply() {
        let backend = MockBackend::with_replies([MockReply::Reply("hello".to_string())])
            .with_delay(std::time::Duration::from_millis(50));
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("  Salam!  ");

        let outcome = chat.submit();
        assert!(matches!(outcome, SubmitOutcome::Sent { seq: 1, .. }));
        assert_eq!(texts(&chat), vec![(Sender::User, "Salam!".to_string())]);
        assert!(chat.composer().input.is_empty());
        assert!(chat.is_waiting());

        let reply = chat.settle(&mut rx).await.unwrap();
        assert_eq!(reply.sender, Sender::Ai);
        assert_eq!(reply.text, "hello");
        assert!(!chat.is_waiting());
        assert_eq!(chat.history().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_text_and_file_appends_two_entries() {
        let backend = MockBackend::new();
        let (mut chat, mut rx) = setup(backend.clone());
        chat.composer_mut().input.set_text("see attached");
        chat.attach_file(Attachment::new("essay.docx", b"PK".to_vec()));

        chat.submit();
        assert_eq!(
            texts(&chat),
            vec![
                (Sender::User, "see attached".to_string()),
                (Sender::User, "[Attaching file: essay.docx]".to_string()),
            ]
        );
        assert!(chat.composer().selected_file().is_none());
        assert!(!chat.composer().is_preview_visible());

        chat.settle(&mut rx).await;
        let sent = backend.recorded();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text.as_deref(), Some("see attached"));
        assert_eq!(sent[0].attachment.as_ref().unwrap().filename, "essay.docx");
        assert_eq!(sent[0].sender_name, "Merjen Atayeva");
        assert_eq!(sent[0].language, "Turkmen");
    }

    #[tokio::test]
    async fn test_submit_file_only() {
        let backend = MockBackend::new();
        let (mut chat, mut rx) = setup(backend.clone());
        chat.attach_file(Attachment::new("scan 01.png", vec![0x89]));

        chat.submit();
        assert_eq!(
            texts(&chat),
            vec![(Sender::User, "[Attaching file: scan 01.png]".to_string())]
        );
        chat.settle(&mut rx).await;
        assert_eq!(backend.recorded()[0].message_field(), "");
    }

    #[tokio::test]
    async fn test_rejected_with_detail() {
        let backend = MockBackend::with_replies([MockReply::Rejected {
            status: 400,
            detail: Some("bad request".to_string()),
        }]);
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("hi");
        chat.submit();

        let entry = chat.settle(&mut rx).await.unwrap();
        assert_eq!(entry, &ChatEntry::ai("bad request"));
        assert_eq!(chat.last_error(), Some("Backend returned 400"));
    }

    #[tokio::test]
    async fn test_rejected_without_detail_uses_placeholder() {
        let backend = MockBackend::with_replies([MockReply::Rejected {
            status: 502,
            detail: None,
        }]);
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("hi");
        chat.submit();

        let entry = chat.settle(&mut rx).await.unwrap();
        assert_eq!(entry.text, AI_ERROR_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_transport_failure_uses_server_error() {
        let backend = MockBackend::with_replies([MockReply::Network("connection refused".to_string())]);
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("hi");
        chat.submit();

        let entry = chat.settle(&mut rx).await.unwrap();
        assert_eq!(entry, &ChatEntry::ai(SERVER_ERROR_PLACEHOLDER));
        assert!(chat.last_error().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_malformed_reply_uses_server_error() {
        let backend = MockBackend::with_replies([MockReply::Malformed("expected value".to_string())]);
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("hi");
        chat.submit();

        assert_eq!(chat.settle(&mut rx).await.unwrap().text, SERVER_ERROR_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_second_submit_while_waiting_is_refused() {
        let backend = MockBackend::new().with_delay(std::time::Duration::from_millis(50));
        let (mut chat, mut rx) = setup(backend.clone());
        chat.composer_mut().input.set_text("first");
        chat.submit();

        chat.composer_mut().input.set_text("second");
        assert!(matches!(chat.submit(), SubmitOutcome::Busy { waiting_for: 1 }));
        assert_eq!(chat.composer().input.text(), "second");
        assert_eq!(chat.history().len(), 1);
        assert!(chat.status().is_some());

        chat.settle(&mut rx).await;
        assert!(matches!(chat.submit(), SubmitOutcome::Sent { seq: 2, .. }));
        chat.settle(&mut rx).await;
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_submit_while_waiting_changes_nothing() {
        let backend = MockBackend::new().with_delay(std::time::Duration::from_millis(50));
        let (mut chat, mut rx) = setup(backend.clone());
        chat.composer_mut().input.set_text("first");
        chat.submit();

        chat.composer_mut().input.set_text("  ");
        assert!(matches!(chat.submit(), SubmitOutcome::Empty));
        assert!(chat.status().is_none());
        assert_eq!(chat.history().len(), 1);
        assert_eq!(chat.revision(), 1);

        chat.settle(&mut rx).await;
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_widget_usable_after_error() {
        let backend = MockBackend::with_replies([
            MockReply::Network("down".to_string()),
            MockReply::Reply("back up".to_string()),
        ]);
        let (mut chat, mut rx) = setup(backend);
        chat.composer_mut().input.set_text("one");
        chat.submit();
        chat.settle(&mut rx).await;

        chat.composer_mut().input.set_text("two");
        chat.submit();
        assert_eq!(chat.settle(&mut rx).await.unwrap().text, "back up");
        assert_eq!(chat.history().len(), 4);
    }

    #[tokio::test]
    async fn test_revision_tracks_appends() {
        let (mut chat, mut rx) = setup(MockBackend::new());
        chat.composer_mut().input.set_text("x");
        chat.attach_file(Attachment::new("y.txt", vec![]));
        chat.submit();
        assert_eq!(chat.revision(), 2);
        chat.settle(&mut rx).await;
        assert_eq!(chat.revision(), 3);
    }

    #[tokio::test]
    async fn test_settle_without_pending_returns_none() {
        let (mut chat, mut rx) = setup(MockBackend::new());
        assert!(chat.settle(&mut rx).await.is_none());
    }

    #[tokio::test]
    async fn test_attach_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let (mut chat, _rx) = setup(MockBackend::new());
        chat.attach_path(&path).await.unwrap();
        assert_eq!(chat.composer().preview_label(), Some("data.csv"));
        chat.clear_attachment();
        chat.clear_attachment();
        assert_eq!(chat.composer().preview_label(), None);
    }
}
