//! API error types and response mapping.
//!
//! Every failure leaving a handler turns into a structured JSON body with a
//! 4xx/5xx status; clients never see a framework error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::AppError;

/// API error taxonomy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed body or missing required field
    #[error("Invalid task data")]
    InvalidInput,

    /// No task for the given id
    #[error("Task not found")]
    NotFound,

    /// Unexpected persistence or runtime fault
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        // Log the detail here; the client only gets the generic message
        tracing::error!(error = %err, "storage operation failed");
        ApiError::Internal
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_body_shape() {
        let response = ApiError::NotFound.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Task not found" }));
    }

    #[test]
    fn test_storage_errors_are_opaque() {
        let err = AppError::storage("connection lost");
        assert_eq!(ApiError::from(err), ApiError::Internal);
    }
}
