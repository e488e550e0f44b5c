//! Route definitions for the content section resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Public routes mounted at `/content`.
///
/// ```text
/// GET /         -> list
/// GET /{key}    -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list))
        .route("/{key}", get(content::get))
}

/// Admin routes mounted at `/admin/content`.
///
/// ```text
/// PUT /{key}    -> upsert
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/{key}", put(content::upsert))
}
