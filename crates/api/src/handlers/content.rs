//! Handlers for the public `/content` and admin `/admin/content` resources.

use axum::extract::State;
use axum::Json;
use folio_core::content::{ContentKey, SectionContent};
use folio_core::error::CoreError;
use folio_db::models::content_section::ContentSection;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/content
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContentSection>>> {
    let sections = state.store.list_content_sections().await?;
    Ok(Json(sections))
}

/// GET /api/content/{key}
///
/// Returns the content document itself. An unrecognised key is reported as
/// not found, the same as a known key with nothing stored yet.
pub async fn get(
    State(state): State<AppState>,
    AppPath(key): AppPath<String>,
) -> AppResult<Json<SectionContent>> {
    let Ok(parsed) = key.parse::<ContentKey>() else {
        return Err(CoreError::not_found("ContentSection", &key).into());
    };

    let section = state
        .store
        .find_content_section(parsed)
        .await?
        .ok_or_else(|| CoreError::not_found("ContentSection", &key))?;
    Ok(Json(section.content))
}

/// PUT /api/admin/content/{key}
///
/// Replaces the whole document for `key`, creating the section if absent.
/// The body must match the shape of that key's record.
pub async fn upsert(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppPath(key): AppPath<String>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<ContentSection>> {
    let key: ContentKey = key.parse()?;
    let content = SectionContent::from_value(key, body)?;

    let section = state.store.upsert_content_section(&content).await?;

    tracing::info!(key = %key, admin_id = admin.id, "Content section saved");
    Ok(Json(section))
}
