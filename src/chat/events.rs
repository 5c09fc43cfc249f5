// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the chat controller
//!
//! Submissions run on spawned tasks and report back to the UI loop through
//! these events, so the screen never blocks on the network.

use tokio::sync::mpsc;

/// Events sent from request tasks back to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The backend answered submission `seq`
    ReplyReceived { seq: u64, text: String },
    /// The backend rejected submission `seq` with an error status
    ReplyRejected {
        seq: u64,
        status: u16,
        detail: Option<String>,
    },
    /// Submission `seq` failed below the application level
    TransportFailed { seq: u64, error: String },
}

impl ChatEvent {
    /// Sequence number of the submission this event settles.
    pub fn seq(&self) -> u64 {
        match self {
            ChatEvent::ReplyReceived { seq, .. }
            | ChatEvent::ReplyRejected { seq, .. }
            | ChatEvent::TransportFailed { seq, .. } => *seq,
        }
    }
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<ChatEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if receiver is dropped
pub fn send_event(tx: &EventSender, event: ChatEvent) {
    let _ = tx.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq() {
        assert_eq!(
            ChatEvent::ReplyReceived {
                seq: 3,
                text: "hi".to_string()
            }
            .seq(),
            3
        );
        assert_eq!(
            ChatEvent::ReplyRejected {
                seq: 5,
                status: 400,
                detail: None
            }
            .seq(),
            5
        );
        assert_eq!(
            ChatEvent::TransportFailed {
                seq: 4,
                error: "refused".to_string()
            }
            .seq(),
            4
        );
    }

    #[tokio::test]
    async fn test_send_event_after_receiver_dropped() {
        let (tx, rx) = create_event_channel();
        drop(rx);
        send_event(
            &tx,
            ChatEvent::TransportFailed {
                seq: 1,
                error: "gone".to_string(),
            },
        );
    }

    #[tokio::test]
    async fn test_channel_delivers_in_order() {
        let (tx, mut rx) = create_event_channel();
        let first = ChatEvent::ReplyReceived {
            seq: 1,
            text: "one".to_string(),
        };
        let second = ChatEvent::ReplyReceived {
            seq: 2,
            text: "two".to_string(),
        };
        send_event(&tx, first.clone());
        send_event(&tx, second.clone());
        assert_eq!(rx.recv().await, Some(first));
        assert_eq!(rx.recv().await, Some(second));
    }
}
