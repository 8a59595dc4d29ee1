//! Message repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed lookups, owner-filtered listing, insert-save, targeted
//!   text update and delete over `messages` storage.
//!
//! # Invariants
//! - `save` assigns the surrogate key; callers never pick message ids.
//! - `update_text` changes only `message_text`; owner and post time are
//!   untouched.
//! - No referential check on `posted_by` happens at this layer.

use crate::model::account::AccountId;
use crate::model::message::{Message, MessageId, NewMessage};
use crate::repo::{ensure_schema_ready, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const MESSAGE_SELECT_SQL: &str =
    "SELECT message_id, posted_by, message_text, time_posted_epoch FROM messages";

const MESSAGE_COLUMNS: &[&str] = &["message_id", "posted_by", "message_text", "time_posted_epoch"];

/// Store contract for message CRUD.
pub trait MessageRepository {
    fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;
    fn find_all(&self) -> RepoResult<Vec<Message>>;
    fn find_by_posted_by(&self, account_id: AccountId) -> RepoResult<Vec<Message>>;
    fn exists_by_id(&self, id: MessageId) -> RepoResult<bool>;
    fn save(&self, draft: &NewMessage) -> RepoResult<Message>;
    /// Overwrites `message_text` for one row. Returns rows changed (0 or 1).
    fn update_text(&self, id: MessageId, text: &str) -> RepoResult<usize>;
    /// Deletes one row by id. Returns rows changed (0 or 1).
    fn delete_by_id(&self, id: MessageId) -> RepoResult<usize>;
}

/// SQLite-backed message repository.
pub struct SqliteMessageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMessageRepository<'conn> {
    /// Wraps a migrated connection, rejecting un-bootstrapped ones.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn, "messages", MESSAGE_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl MessageRepository for SqliteMessageRepository<'_> {
    fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        let message = self
            .conn
            .query_row(
                &format!("{MESSAGE_SELECT_SQL} WHERE message_id = ?1;"),
                [id],
                parse_message_row,
            )
            .optional()?;
        Ok(message)
    }

    fn find_all(&self) -> RepoResult<Vec<Message>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MESSAGE_SELECT_SQL} ORDER BY message_id ASC;"))?;
        let messages = collect_messages(stmt.query([])?);
        messages
    }

    fn find_by_posted_by(&self, account_id: AccountId) -> RepoResult<Vec<Message>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MESSAGE_SELECT_SQL} WHERE posted_by = ?1 ORDER BY message_id ASC;"
        ))?;
        let messages = collect_messages(stmt.query([account_id])?);
        messages
    }

    fn exists_by_id(&self, id: MessageId) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM messages WHERE message_id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn save(&self, draft: &NewMessage) -> RepoResult<Message> {
        self.conn.execute(
            "INSERT INTO messages (posted_by, message_text, time_posted_epoch)
             VALUES (?1, ?2, ?3);",
            params![
                draft.posted_by,
                draft.message_text.as_str(),
                draft.time_posted_epoch,
            ],
        )?;

        Ok(Message {
            message_id: self.conn.last_insert_rowid(),
            posted_by: draft.posted_by,
            message_text: draft.message_text.clone(),
            time_posted_epoch: draft.time_posted_epoch,
        })
    }

    fn update_text(&self, id: MessageId, text: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE messages SET message_text = ?1 WHERE message_id = ?2;",
            params![text, id],
        )?;
        Ok(changed)
    }

    fn delete_by_id(&self, id: MessageId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM messages WHERE message_id = ?1;", [id])?;
        Ok(changed)
    }
}

fn collect_messages(mut rows: rusqlite::Rows<'_>) -> RepoResult<Vec<Message>> {
    let mut messages = Vec::new();
    while let Some(row) = rows.next()? {
        messages.push(parse_message_row(row)?);
    }
    Ok(messages)
}

fn parse_message_row(row: &Row<'_>) -> rusqlite::Result<Message> {
    Ok(Message {
        message_id: row.get("message_id")?,
        posted_by: row.get("posted_by")?,
        message_text: row.get("message_text")?,
        time_posted_epoch: row.get("time_posted_epoch")?,
    })
}
