//! Domain model for accounts and the messages they post.
//!
//! # Responsibility
//! - Define canonical stored records and their insert drafts.
//! - Keep external (camelCase) field naming in one place.
//!
//! # Invariants
//! - Surrogate ids are assigned by storage on first save, never by callers.

pub mod account;
pub mod message;
