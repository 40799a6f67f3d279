//! Application error taxonomy and its single HTTP mapping point.
//!
//! Every failure raised inside services or repositories propagates up as an
//! [`AppError`] and is rendered exactly once by the [`IntoResponse`]
//! implementation. The wire shape of every error response is
//! `{"errors": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    errors: String,
}

/// Application error kinds, each tied to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input rejected before business logic (400).
    #[error("{0}")]
    Validation(String),

    /// Missing/unknown token or failed credentials (401). The login path
    /// deliberately reuses one message for unknown users and wrong
    /// passwords.
    #[error("{0}")]
    Unauthorized(String),

    /// Lookup failures, including contacts owned by someone else (404).
    #[error("{0}")]
    NotFound(String),

    /// Business-rule conflicts such as a duplicate username (409).
    #[error("{0}")]
    Conflict(String),

    /// Catch-all for unexpected failures (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The HTTP status this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                message
            }
            AppError::Validation(message)
            | AppError::Unauthorized(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message) => message,
        };

        (status, Json(ErrorBody { errors: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(format!("Validation Error: {e}"))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::Conflict("Unique constraint violation".to_string());
            }
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return Self::NotFound("Record not found".to_string());
        }

        tracing::error!(error = %e, "Database error");
        Self::Internal("Database error".to_string())
    }
}
