//! Account domain model.
//!
//! # Responsibility
//! - Define the stored account record and its registration draft.
//!
//! # Invariants
//! - `account_id` is storage-assigned and stable for the account lifetime.
//! - `username` is unique across accounts at registration time.

use serde::{Deserialize, Serialize};

/// Storage-assigned surrogate key for accounts.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AccountId = i64;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 4;

/// Stored account record.
///
/// Passwords are held and compared in plaintext. Hashing is an explicit
/// non-goal of this core; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Surrogate key, assigned by the store on first save.
    pub account_id: AccountId,
    pub username: String,
    pub password: String,
}

/// Registration/login request draft, identity not yet assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

impl NewAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
