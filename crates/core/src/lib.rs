//! Domain logic for the Folio portfolio backend.
//!
//! This crate has no internal dependencies so it can be shared by the store,
//! the HTTP API, and the seeding tool alike.

pub mod content;
pub mod error;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
