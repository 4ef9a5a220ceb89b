use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use review_pulse_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `review_pulse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A requested resource does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Ingestion(msg) => (
                    StatusCode::BAD_REQUEST,
                    "INGESTION_ERROR",
                    format!("Ingestion failed: {msg}"),
                ),
                CoreError::EmptyDataset => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EMPTY_DATASET",
                    "Dataset has no records".to_string(),
                ),
                CoreError::NotAnnotated { index } => (
                    StatusCode::CONFLICT,
                    "NOT_ANNOTATED",
                    format!("Record {index} has not been annotated"),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
