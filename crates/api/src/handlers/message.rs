//! Handlers for the public contact form and the admin `/admin/messages` inbox.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::{require_fields, validate_email, validate_max_len, MAX_MESSAGE_LEN};
use folio_db::models::message::{CreateMessage, Message, NewMessage};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMessage>,
) -> AppResult<(StatusCode, Json<Message>)> {
    require_fields(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
        ("message", input.message.as_deref()),
    ])?;

    let email = input.email.unwrap_or_default().trim().to_string();
    validate_email("email", &email)?;

    let body = input.message.unwrap_or_default().trim().to_string();
    validate_max_len("message", &body, MAX_MESSAGE_LEN)?;

    let new_message = NewMessage {
        name: input.name.unwrap_or_default().trim().to_string(),
        email,
        subject: input
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        message: body,
    };

    let message = state.store.create_message(&new_message).await?;

    tracing::info!(message_id = message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/admin/messages
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<Message>>> {
    let messages = state.store.list_messages().await?;
    Ok(Json(messages))
}

/// GET /api/admin/messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Message>> {
    let message = state
        .store
        .find_message(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Message", id))?;
    Ok(Json(message))
}

/// DELETE /api/admin/messages/{id}
pub async fn delete(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !state.store.delete_message(id).await? {
        return Err(CoreError::not_found("Message", id).into());
    }

    tracing::info!(message_id = id, admin_id = admin.id, "Message deleted");
    Ok(StatusCode::NO_CONTENT)
}
