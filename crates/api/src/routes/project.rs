//! Route definitions for the project resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET /          -> list
/// GET /{slug}    -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{slug}", get(project::get_by_slug))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /       -> admin_list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::admin_list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
