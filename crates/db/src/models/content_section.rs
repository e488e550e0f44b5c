//! Content section model.

use folio_core::content::{ContentKey, SectionContent};
use folio_core::error::CoreError;
use folio_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// One editable block of site copy. At most one exists per key.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSection {
    pub key: ContentKey,
    pub content: SectionContent,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raw row from the `content_sections` table, before the JSONB document is
/// decoded against its key.
#[derive(Debug, Clone, FromRow)]
pub struct ContentSectionRow {
    pub key: String,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ContentSectionRow> for ContentSection {
    type Error = CoreError;

    fn try_from(row: ContentSectionRow) -> Result<Self, Self::Error> {
        let key: ContentKey = row.key.parse()?;
        Ok(ContentSection {
            key,
            content: SectionContent::from_value(key, row.content)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
