//! The auth gate: exchanges admin credentials for a bearer token and turns a
//! bearer token back into an admin identity.

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::EntityStore;
use serde::Serialize;

use crate::auth::jwt::{generate_access_token, validate_token, JwtConfig};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};

/// The authenticated admin as exposed to handlers and API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

/// A freshly issued access token with its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    pub admin: AdminIdentity,
}

/// Well-formed Argon2id hash with default parameters that no password matches.
/// Verified against on the unknown-email path so both rejection paths pay for
/// one Argon2 run.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Verify `email`/`password` against the stored admin and issue a token.
///
/// An unknown email and a wrong password both yield
/// [`CoreError::InvalidCredentials`] after the same Argon2 work, so callers
/// cannot tell from the response or its latency which emails are registered.
pub async fn issue_token(
    store: &dyn EntityStore,
    config: &JwtConfig,
    email: &str,
    password: &str,
) -> AppResult<IssuedToken> {
    let Some(admin) = store.find_admin_by_email(email).await? else {
        let _ = verify_password(password, DUMMY_PASSWORD_HASH);
        tracing::warn!("Login attempt for unknown admin email");
        return Err(CoreError::InvalidCredentials.into());
    };

    let valid = verify_password(password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(admin_id = admin.id, "Login attempt with wrong password");
        return Err(CoreError::InvalidCredentials.into());
    }

    let token = generate_access_token(admin.id, &admin.email, &admin.role, config)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(IssuedToken {
        token,
        expires_in: config.expires_in_secs(),
        admin: AdminIdentity {
            id: admin.id,
            email: admin.email,
            role: admin.role,
        },
    })
}

/// Decode a bearer token into the identity it was issued for.
///
/// An expired token yields [`CoreError::TokenExpired`]; any other failure
/// (bad signature, malformed token, wrong algorithm) yields
/// [`CoreError::InvalidToken`].
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<AdminIdentity, CoreError> {
    use jsonwebtoken::errors::ErrorKind;

    let claims = validate_token(token, config).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => CoreError::TokenExpired,
        _ => CoreError::InvalidToken("Invalid token".into()),
    })?;

    Ok(AdminIdentity {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
