//! Account registration and login use-cases.
//!
//! # Responsibility
//! - Validate registration requests before any write.
//! - Check login credentials against stored records.
//!
//! # Invariants
//! - Rejections return `Ok(None)` with no reason attached; callers cannot
//!   tell a taken username from a short password, or an unknown user from a
//!   wrong password.
//! - `login` never mutates storage.

use crate::model::account::{Account, NewAccount, PASSWORD_MIN_CHARS};
use crate::repo::account_repo::AccountRepository;
use crate::repo::RepoResult;

/// Use-case service for account registration and login.
///
/// Stateless between calls; the repository is the only collaborator and is
/// injected at construction time.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account.
    ///
    /// # Contract
    /// - Blank (empty or all-whitespace) username -> `Ok(None)`.
    /// - Password shorter than 4 characters -> `Ok(None)`.
    /// - Username already taken -> `Ok(None)`.
    /// - Otherwise persists the draft and returns the stored record with its
    ///   assigned id.
    ///
    /// The uniqueness check and the insert are two store round-trips with a
    /// race window between them; see DESIGN.md.
    pub fn register(&self, draft: &NewAccount) -> RepoResult<Option<Account>> {
        if draft.username.trim().is_empty() {
            return Ok(None);
        }
        if draft.password.chars().count() < PASSWORD_MIN_CHARS {
            return Ok(None);
        }
        if self.repo.find_by_username(&draft.username)?.is_some() {
            return Ok(None);
        }

        let account = self.repo.save(draft)?;
        Ok(Some(account))
    }

    /// Logs in an existing account.
    ///
    /// # Contract
    /// - Returns the stored record when a record with the supplied username
    ///   exists and its password matches exactly (case-sensitive plaintext).
    /// - Unknown username and wrong password both collapse to `Ok(None)`.
    pub fn login(&self, credentials: &NewAccount) -> RepoResult<Option<Account>> {
        let existing = self.repo.find_by_username(&credentials.username)?;
        Ok(existing.filter(|account| account.password == credentials.password))
    }
}
