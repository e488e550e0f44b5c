//! Repository for the `content_sections` table.

use folio_core::content::ContentKey;
use sqlx::PgPool;

use crate::models::content_section::ContentSectionRow;

const COLUMNS: &str = "key, content, created_at, updated_at";

/// Provides read and upsert operations for content sections.
///
/// Rows are returned undecoded; the store turns them into
/// [`ContentSection`](crate::models::content_section::ContentSection)s.
pub struct ContentSectionRepo;

impl ContentSectionRepo {
    /// List every stored section ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContentSectionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_sections ORDER BY key ASC");
        sqlx::query_as::<_, ContentSectionRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the section stored under `key`.
    pub async fn find_by_key(
        pool: &PgPool,
        key: ContentKey,
    ) -> Result<Option<ContentSectionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_sections WHERE key = $1");
        sqlx::query_as::<_, ContentSectionRow>(&query)
            .bind(key.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Replace the whole document for `key`, creating the row on first write.
    pub async fn upsert(
        pool: &PgPool,
        key: ContentKey,
        content: &serde_json::Value,
    ) -> Result<ContentSectionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_sections (key, content)
             VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE
                SET content = EXCLUDED.content, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSectionRow>(&query)
            .bind(key.as_str())
            .bind(content)
            .fetch_one(pool)
            .await
    }
}
