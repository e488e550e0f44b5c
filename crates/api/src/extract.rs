//! Request extractors with JSON error responses.
//!
//! Each wraps the matching axum extractor and turns its rejection into an
//! [`AppError::BadRequest`], so malformed bodies, path segments and query
//! strings get the same `{ "error", "code" }` shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Drop-in replacement for [`axum::extract::Path`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Drop-in replacement for [`axum::extract::Query`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
