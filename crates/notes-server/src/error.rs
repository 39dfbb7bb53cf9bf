//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use notes_store::StoreError;

use crate::validate::ValidationError;

/// Message returned for any note lookup that misses.
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Message returned when a request panicked.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Validation failure or malformed body (400).
    #[error("{0}")]
    Validation(String),

    /// Method not supported on an existing route (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::MethodNotAllowed(_) => "method_not_allowed",
            Self::Internal(_) => "internal_server_error",
            Self::Store(StoreError::NotFound(_)) => "not_found",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing message. Store errors are not echoed verbatim.
    pub fn message(&self) -> String {
        match self {
            Self::Store(StoreError::NotFound(_)) => NOTE_NOT_FOUND.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// JSON error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "not_found", "validation_error").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse::new(self.code(), self.message());
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_codes_and_statuses() {
        let cases = [
            (ApiError::NotFound("x".into()), "not_found", StatusCode::NOT_FOUND),
            (
                ApiError::Validation("x".into()),
                "validation_error",
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::MethodNotAllowed("x".into()),
                "method_not_allowed",
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            (
                ApiError::Internal("x".into()),
                "internal_server_error",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Store(StoreError::NotFound("abc".into())),
                "not_found",
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn test_store_not_found_message_hides_id() {
        let err = ApiError::from(StoreError::NotFound("abc".into()));
        assert_eq!(err.message(), "Note not found");
    }

    #[test]
    fn test_validation_error_converts() {
        let err = ApiError::from(ValidationError::MissingFields);
        assert_eq!(err.code(), "validation_error");
        assert_eq!(err.message(), "Title and content are required");
    }

    #[tokio::test]
    async fn test_into_response_body_shape() {
        let response = ApiError::NotFound(NOTE_NOT_FOUND.into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, ErrorResponse::new("not_found", "Note not found"));
    }
}
