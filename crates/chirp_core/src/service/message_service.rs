//! Message CRUD use-cases.
//!
//! # Responsibility
//! - Validate message text before any write.
//! - Cross-check message ownership against the account store on the strict
//!   creation path.
//!
//! # Invariants
//! - `post_message`, `update_message` and `delete_message` reject softly
//!   (absent result or zero count, no reason).
//! - `create_message` is the only operation that rejects with a
//!   user-displayable reason, and the only one that verifies `posted_by`.
//! - Text length limits count Unicode scalars, boundary 255 inclusive.

use crate::model::account::AccountId;
use crate::model::message::{Message, MessageId, NewMessage, MESSAGE_TEXT_MAX_CHARS};
use crate::repo::account_repo::AccountRepository;
use crate::repo::message_repo::MessageRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard-rejection error for `create_message`.
///
/// The validation variants carry the exact user-displayable reasons the
/// external layer forwards verbatim.
#[derive(Debug)]
pub enum CreateMessageError {
    /// Message text is empty.
    BlankText,
    /// Message text exceeds the 255-character limit.
    TextTooLong,
    /// `posted_by` references no known account.
    UserNotFound,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CreateMessageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "Message text cannot be blank"),
            Self::TextTooLong => write!(f, "Message text must be under 255 characters"),
            Self::UserNotFound => write!(f, "User not found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CreateMessageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CreateMessageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for message CRUD.
///
/// Stateless between calls. Holds the message store plus the account store
/// needed by the strict creation path, both injected at construction time.
pub struct MessageService<M: MessageRepository, A: AccountRepository> {
    messages: M,
    accounts: A,
}

impl<M: MessageRepository, A: AccountRepository> MessageService<M, A> {
    /// Creates a service using the provided repository implementations.
    pub fn new(messages: M, accounts: A) -> Self {
        Self { messages, accounts }
    }

    /// Posts a new message (loose path).
    ///
    /// # Contract
    /// - Blank (trimmed-empty) text or text over 255 characters -> `Ok(None)`.
    /// - `posted_by` is NOT verified; orphan owners persist fine.
    pub fn post_message(&self, draft: &NewMessage) -> RepoResult<Option<Message>> {
        if is_blank(&draft.message_text) || char_count(&draft.message_text) > MESSAGE_TEXT_MAX_CHARS
        {
            return Ok(None);
        }
        let message = self.messages.save(draft)?;
        Ok(Some(message))
    }

    /// Returns every stored message.
    pub fn get_all_messages(&self) -> RepoResult<Vec<Message>> {
        self.messages.find_all()
    }

    /// Returns one message by id, absent when no such row exists.
    pub fn get_message_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        self.messages.find_by_id(id)
    }

    /// Deletes one message by id.
    ///
    /// Returns 1 when a row existed and was deleted, 0 otherwise. The
    /// existence check and the delete are separate store round-trips.
    pub fn delete_message(&self, id: MessageId) -> RepoResult<u32> {
        if !self.messages.exists_by_id(id)? {
            return Ok(0);
        }
        self.messages.delete_by_id(id)?;
        Ok(1)
    }

    /// Overwrites the text of one message by id.
    ///
    /// # Contract
    /// - Text is validated BEFORE the target row is looked up: blank
    ///   (trimmed-empty) or over-255 text -> 0 without touching storage.
    /// - Missing row -> 0.
    /// - On success only `message_text` changes; owner and post time keep
    ///   their stored values. Returns 1.
    pub fn update_message(&self, id: MessageId, new_text: &str) -> RepoResult<u32> {
        if is_blank(new_text) || char_count(new_text) > MESSAGE_TEXT_MAX_CHARS {
            return Ok(0);
        }
        if self.messages.find_by_id(id)?.is_none() {
            return Ok(0);
        }
        self.messages.update_text(id, new_text)?;
        Ok(1)
    }

    /// Returns every message posted by one account, possibly empty.
    pub fn get_messages_by_user_id(&self, account_id: AccountId) -> RepoResult<Vec<Message>> {
        self.messages.find_by_posted_by(account_id)
    }

    /// Creates a new message (strict path).
    ///
    /// # Contract
    /// Checks run in order and fail with a distinguishable reason:
    /// 1. Empty text (no trimming — whitespace-only text passes, unlike
    ///    `post_message`; preserved inconsistency, see DESIGN.md).
    /// 2. Text over 255 characters.
    /// 3. `posted_by` referencing no stored account.
    ///
    /// On success persists the draft and returns the stored record with its
    /// assigned id.
    pub fn create_message(&self, draft: &NewMessage) -> Result<Message, CreateMessageError> {
        if draft.message_text.is_empty() {
            return Err(CreateMessageError::BlankText);
        }
        if char_count(&draft.message_text) > MESSAGE_TEXT_MAX_CHARS {
            return Err(CreateMessageError::TextTooLong);
        }
        if !self.accounts.exists_by_id(draft.posted_by)? {
            return Err(CreateMessageError::UserNotFound);
        }

        Ok(self.messages.save(draft)?)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::{char_count, is_blank, CreateMessageError};

    #[test]
    fn blank_check_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank("  x  "));
    }

    #[test]
    fn char_count_uses_unicode_scalars_not_bytes() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(char_count(&"ü".repeat(255)), 255);
    }

    #[test]
    fn hard_rejection_reasons_are_user_displayable() {
        assert_eq!(
            CreateMessageError::BlankText.to_string(),
            "Message text cannot be blank"
        );
        assert_eq!(
            CreateMessageError::TextTooLong.to_string(),
            "Message text must be under 255 characters"
        );
        assert_eq!(CreateMessageError::UserNotFound.to_string(), "User not found");
    }
}
