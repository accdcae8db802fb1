use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use filmseek_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
///
/// Note that the search endpoints deliberately do NOT route store
/// failures through this type: their contract is a 200 response carrying
/// an error note, so "failed" stays distinguishable from "no matches"
/// without breaking clients that only look at the body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `filmseek_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::StoreUnavailable(msg) => {
                    tracing::error!(error = %msg, "Store unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "STORE_UNAVAILABLE",
                        "The backing store is unavailable".to_string(),
                    )
                }
                CoreError::QueryFailed(msg) => {
                    tracing::error!(error = %msg, "Query failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "QUERY_FAILED",
                        "An internal error occurred".to_string(),
                    )
                }
                // Absorbed inside their components; reaching here is a bug
                // in the caller, reported as a plain internal error.
                CoreError::ProviderUnavailable(msg) | CoreError::LoggingFailed(msg) => {
                    tracing::error!(error = %msg, "Unexpected component error at HTTP boundary");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                let core = classify_sqlx_error(err);
                return AppError::Core(core).into_response();
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into the domain taxonomy.
///
/// - Pool acquisition, closed-pool, and I/O errors are `StoreUnavailable`.
/// - `RowNotFound` becomes a generic `QueryFailed` (single-entity lookups
///   map absence to `NotFound` themselves, with a proper entity name).
/// - Everything else is `QueryFailed`.
pub fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            CoreError::StoreUnavailable(err.to_string())
        }
        other => CoreError::QueryFailed(other.to_string()),
    }
}
