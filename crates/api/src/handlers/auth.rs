//! Handlers for the `/admin/auth` resource (login, current identity).

use axum::extract::State;
use axum::Json;
use folio_core::validation::require_fields;
use serde::{Deserialize, Serialize};

use crate::auth::gate::{issue_token, AdminIdentity};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/auth/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminIdentity,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/auth/login
///
/// Exchange email + password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    require_fields(&[
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ])?;

    let email = input.email.unwrap_or_default();
    let password = input.password.unwrap_or_default();

    let issued = issue_token(
        state.store.as_ref(),
        &state.config.jwt,
        email.trim(),
        &password,
    )
    .await?;

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: "Bearer",
        expires_in: issued.expires_in,
        admin: issued.admin,
    }))
}

/// GET /api/admin/auth/me
///
/// Return the identity the bearer token was issued for.
pub async fn me(AuthAdmin(admin): AuthAdmin) -> Json<AdminIdentity> {
    Json(admin)
}
