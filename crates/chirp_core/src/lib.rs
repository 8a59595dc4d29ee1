//! Core domain logic for chirp, a minimal social-posting backend.
//! This crate is the single source of truth for the validation contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountId, NewAccount, PASSWORD_MIN_CHARS};
pub use model::message::{Message, MessageId, NewMessage, MESSAGE_TEXT_MAX_CHARS};
pub use repo::account_repo::{AccountRepository, SqliteAccountRepository};
pub use repo::message_repo::{MessageRepository, SqliteMessageRepository};
pub use repo::{RepoError, RepoResult};
pub use service::account_service::AccountService;
pub use service::message_service::{CreateMessageError, MessageService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
