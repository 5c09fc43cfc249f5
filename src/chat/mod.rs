// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat module
//!
//! Everything between the keyboard and the backend that does not depend on
//! a terminal: the composer, the append-only history, the backend client and
//! the controller that ties them together.

pub mod backend;
pub mod composer;
pub mod controller;
pub mod entry;
pub mod events;
pub mod message;
pub mod mock_backend;

pub use backend::{ChatBackend, HttpBackend};
pub use composer::{Composer, TextInput};
pub use controller::{ChatController, SubmitOutcome};
pub use entry::{
    attachment_notice, ChatEntry, ChatHistory, Sender, AI_ERROR_PLACEHOLDER,
    SERVER_ERROR_PLACEHOLDER,
};
pub use events::{create_event_channel, ChatEvent, EventReceiver, EventSender};
pub use message::{Attachment, OutgoingMessage};
