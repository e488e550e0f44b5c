pub mod auth;
pub mod content;
pub mod health;
pub mod message;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                    list, ?featured=true (public)
/// /projects/{slug}             get by slug (public)
/// /content                     list sections (public)
/// /content/{key}               get section content (public)
/// /contact                     submit message (public)
///
/// /admin/auth/login            login (public)
/// /admin/auth/me               current identity (requires auth)
/// /admin/projects              list, create (requires auth)
/// /admin/projects/{id}         get, update, delete (requires auth)
/// /admin/content/{key}         upsert section (requires auth)
/// /admin/messages              list (requires auth)
/// /admin/messages/{id}         get, delete (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::admin_router())
        .nest("/content", content::admin_router())
        .nest("/messages", message::admin_router());

    Router::new()
        .nest("/projects", project::router())
        .nest("/content", content::router())
        .merge(message::contact_router())
        .nest("/admin", admin)
}
