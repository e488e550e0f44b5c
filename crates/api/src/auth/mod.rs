//! Authentication primitives for the single admin role.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 access-token encoding and decoding.
//! - [`gate`] -- issuing a token for credentials and verifying a bearer token.

pub mod gate;
pub mod jwt;
pub mod password;
