//! Route definitions for contact messages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// The public contact form endpoint, merged at the `/api` root.
///
/// ```text
/// POST /contact  -> create
/// ```
pub fn contact_router() -> Router<AppState> {
    Router::new().route("/contact", post(message::create))
}

/// Admin routes mounted at `/admin/messages`.
///
/// ```text
/// GET    /       -> list
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(message::list))
        .route("/{id}", get(message::get_by_id).delete(message::delete))
}
