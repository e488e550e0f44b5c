//! Repository for the `admin_users` table.

use sqlx::PgPool;

use crate::models::admin_user::{AdminUser, NewAdminUser};

const COLUMNS: &str = "id, email, password_hash, role, created_at, updated_at";

/// Provides lookup and seeding operations for admin users.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Find an admin by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE email = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert an admin, or replace the password hash and role of the existing
    /// admin with the same email.
    pub async fn upsert(pool: &PgPool, input: &NewAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (email, password_hash, role)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE
                SET password_hash = EXCLUDED.password_hash,
                    role = EXCLUDED.role,
                    updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }
}
