//! Well-known admin role names.
//!
//! These must match the `role` values written by the seeding tool.

pub const ROLE_OWNER: &str = "owner";
