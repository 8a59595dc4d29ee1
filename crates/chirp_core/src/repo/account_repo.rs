//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed lookups and insert-save over `accounts` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` assigns the surrogate key; callers never pick account ids.
//! - Username lookups return zero or one record.

use crate::model::account::{Account, AccountId, NewAccount};
use crate::repo::{ensure_schema_ready, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ACCOUNT_SELECT_SQL: &str = "SELECT account_id, username, password FROM accounts";

const ACCOUNT_COLUMNS: &[&str] = &["account_id", "username", "password"];

/// Store contract for account lookups and registration writes.
pub trait AccountRepository {
    fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>>;
    fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;
    fn exists_by_id(&self, id: AccountId) -> RepoResult<bool>;
    fn save(&self, draft: &NewAccount) -> RepoResult<Account>;
}

/// SQLite-backed account repository.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    /// Wraps a migrated connection, rejecting un-bootstrapped ones.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "accounts", ACCOUNT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn find_by_id(&self, id: AccountId) -> RepoResult<Option<Account>> {
        let account = self
            .conn
            .query_row(
                &format!("{ACCOUNT_SELECT_SQL} WHERE account_id = ?1;"),
                [id],
                parse_account_row,
            )
            .optional()?;
        Ok(account)
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let account = self
            .conn
            .query_row(
                &format!("{ACCOUNT_SELECT_SQL} WHERE username = ?1;"),
                [username],
                parse_account_row,
            )
            .optional()?;
        Ok(account)
    }

    fn exists_by_id(&self, id: AccountId) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM accounts WHERE account_id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn save(&self, draft: &NewAccount) -> RepoResult<Account> {
        self.conn.execute(
            "INSERT INTO accounts (username, password) VALUES (?1, ?2);",
            params![draft.username.as_str(), draft.password.as_str()],
        )?;

        Ok(Account {
            account_id: self.conn.last_insert_rowid(),
            username: draft.username.clone(),
            password: draft.password.clone(),
        })
    }
}

fn parse_account_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        account_id: row.get("account_id")?,
        username: row.get("username")?,
        password: row.get("password")?,
    })
}
