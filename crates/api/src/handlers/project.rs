//! Handlers for the public `/projects` and admin `/admin/projects` resources.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::slug::{ensure_unique_slug, slug_from_title, validate_slug};
use folio_core::types::DbId;
use folio_core::validation::{require_fields, validate_max_len, MAX_TITLE_LEN};
use folio_db::models::project::{CreateProject, NewProject, Project, ProjectFilter, UpdateProject};
use folio_db::SharedStore;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/projects[?featured=true]
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ProjectFilter>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects(filter.featured).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .find_project_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", &slug))?;
    Ok(Json(project))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/projects
pub async fn admin_list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects(false).await?;
    Ok(Json(projects))
}

/// GET /api/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .find_project_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    Ok(Json(project))
}

/// POST /api/admin/projects
///
/// The slug is derived from the title and made unique with a numeric
/// suffix, unless the body pins one explicitly.
pub async fn create(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    require_fields(&[
        ("title", input.title.as_deref()),
        ("short_description", input.short_description.as_deref()),
    ])?;

    let title = input.title.unwrap_or_default().trim().to_string();
    validate_max_len("title", &title, MAX_TITLE_LEN)?;

    let slug = match pinned_slug(input.slug.as_deref())? {
        Some(slug) => slug,
        None => resolve_unique_slug(&state.store, &slug_from_title(&title)?, None).await?,
    };

    let new_project = NewProject {
        title,
        slug,
        short_description: input.short_description.unwrap_or_default().trim().to_string(),
        detailed_description: input.detailed_description,
        tech_stack: input.tech_stack,
        category: input.category,
        cover_image_url: input.cover_image_url,
        github_url: input.github_url,
        live_url: input.live_url,
        is_featured: input.is_featured,
        display_order: input.display_order,
        readme_content: input.readme_content,
    };

    let project = state.store.create_project(&new_project).await?;

    tracing::info!(
        project_id = project.id,
        slug = %project.slug,
        admin_id = admin.id,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id}
///
/// Partial update. The slug is re-derived only when the title actually
/// changes and no slug is pinned in the body.
pub async fn update(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let current = state
        .store
        .find_project_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;

    if let Some(title) = input.title.as_mut() {
        *title = title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()).into());
        }
        validate_max_len("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(short_description) = input.short_description.as_mut() {
        *short_description = short_description.trim().to_string();
        if short_description.is_empty() {
            return Err(CoreError::Validation("short_description must not be empty".into()).into());
        }
    }

    let slug = match pinned_slug(input.slug.as_deref())? {
        Some(slug) => slug,
        None => match input.title.as_deref() {
            Some(title) if title != current.title => {
                resolve_unique_slug(&state.store, &slug_from_title(title)?, Some(id)).await?
            }
            _ => current.slug.clone(),
        },
    };

    let project = state
        .store
        .update_project(id, &input, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;

    tracing::info!(
        project_id = id,
        slug = %project.slug,
        admin_id = admin.id,
        "Project updated"
    );

    Ok(Json(project))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !state.store.delete_project(id).await? {
        return Err(CoreError::not_found("Project", id).into());
    }

    tracing::info!(project_id = id, admin_id = admin.id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a slug supplied in the request body. Blank counts as absent.
fn pinned_slug(slug: Option<&str>) -> Result<Option<String>, CoreError> {
    match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(Some(slug.to_string()))
        }
        None => Ok(None),
    }
}

/// Resolve the first free slug for `base`, ignoring the row `exclude_id`.
async fn resolve_unique_slug(
    store: &SharedStore,
    base: &str,
    exclude_id: Option<DbId>,
) -> AppResult<String> {
    ensure_unique_slug(base, |candidate| {
        let store = Arc::clone(store);
        async move {
            store
                .project_slug_exists(&candidate, exclude_id)
                .await
                .map_err(AppError::from)
        }
    })
    .await
}
