//! Repository for the `messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{Message, NewMessage};

const COLUMNS: &str = "id, name, email, subject, message, created_at";

/// Provides create, read, and delete operations for contact messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, subject, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a message by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Message>(&query).fetch_all(pool).await
    }

    /// Delete a message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
