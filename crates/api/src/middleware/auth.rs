//! Bearer-token extractor guarding the admin routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::auth::gate::{verify_token, AdminIdentity};
use crate::error::AppError;
use crate::state::AppState;

/// The admin authenticated by the `Authorization: Bearer <token>` header.
///
/// Taking this as a handler parameter is what makes a route admin-only:
///
/// ```ignore
/// async fn my_handler(AuthAdmin(admin): AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::InvalidToken("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::InvalidToken("Invalid Authorization format. Expected: Bearer <token>".into())
        })?;

        let identity = verify_token(token, &state.config.jwt)?;
        Ok(AuthAdmin(identity))
    }
}
