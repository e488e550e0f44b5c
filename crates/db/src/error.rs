use folio_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Failure reported by an [`EntityStore`](crate::EntityStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write was rejected by a uniqueness constraint. Retryable by the client.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    DuplicateKey { constraint: String },

    /// The store could not be reached or failed to execute the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A stored document could not be decoded into its model.
    #[error("Corrupt stored document: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                tracing::debug!(%constraint, "Unique constraint violation");
                return StoreError::DuplicateKey { constraint };
            }
        }
        StoreError::Unavailable(err.to_string())
    }
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}
