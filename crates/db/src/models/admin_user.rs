//! Admin user model.

use folio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `admin_users` table.
///
/// Contains the password hash, so it is deliberately not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin account written by the seeding tool. Upserted by email.
#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
