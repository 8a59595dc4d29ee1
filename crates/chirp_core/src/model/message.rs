//! Message domain model.
//!
//! # Responsibility
//! - Define the stored message record and its creation draft.
//!
//! # Invariants
//! - `message_id` is storage-assigned and stable for the message lifetime.
//! - `posted_by` references an account id but is only verified by the strict
//!   creation path, never by storage.

use crate::model::account::AccountId;
use serde::{Deserialize, Serialize};

/// Storage-assigned surrogate key for messages.
pub type MessageId = i64;

/// Maximum accepted message text length, in characters (inclusive).
pub const MESSAGE_TEXT_MAX_CHARS: usize = 255;

/// Stored message record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Surrogate key, assigned by the store on first save.
    pub message_id: MessageId,
    /// Posting account id. Referential integrity is enforced by
    /// `MessageService::create_message` only.
    pub posted_by: AccountId,
    pub message_text: String,
    /// Post time in epoch milliseconds, when the caller supplied one.
    pub time_posted_epoch: Option<i64>,
}

/// Message creation draft, identity not yet assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub posted_by: AccountId,
    pub message_text: String,
    pub time_posted_epoch: Option<i64>,
}

impl NewMessage {
    pub fn new(posted_by: AccountId, message_text: impl Into<String>) -> Self {
        Self {
            posted_by,
            message_text: message_text.into(),
            time_posted_epoch: None,
        }
    }
}
