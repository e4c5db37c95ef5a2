//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db::error::DbError;
use serde::Serialize;

/// API error response body. Every failure carries at least `error`;
/// validation failures additionally carry per-field `details`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Db(e) => match e {
                DbError::DuplicateName(_) => StatusCode::CONFLICT,
                DbError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Self::Validation(details) => ErrorResponse {
                error: "validation failed".to_string(),
                details: Some(details),
            },
            // Storage and other unanticipated failures are logged in full but
            // returned as a generic message.
            ref err if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = %err, "internal error while handling request");
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    details: None,
                }
            }
            err => ErrorResponse {
                error: err.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
