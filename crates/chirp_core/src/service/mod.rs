//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into request-scoped use-case APIs.
//! - Own every field-validation rule; repositories stay dumb stores.
//!
//! # Invariants
//! - Soft rejections surface as absent results or zero counts, never as
//!   errors, and carry no reason.
//! - Only `create_message` reports distinguishable failure reasons.

pub mod account_service;
pub mod message_service;
