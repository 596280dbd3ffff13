use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::errors::UseCaseError;
use crate::application::ports::StorageError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::BadRequest(e) => ApiError::bad_request(e.message()),
            UseCaseError::NotFound(msg) => ApiError::not_found(msg),
            UseCaseError::InternalServerError(msg) => ApiError::internal_error(msg),
            UseCaseError::Storage(StorageError::NotFound(path)) => {
                ApiError::not_found(StorageError::NotFound(path).to_string())
            }
            UseCaseError::Storage(StorageError::InvalidPath(path)) => {
                ApiError::bad_request(format!("Invalid storage path: {}", path))
            }
            e @ (UseCaseError::Repository(_) | UseCaseError::Storage(_)) => {
                error!(error = %e, "Infrastructure failure");
                ApiError::internal_error(e.to_string())
            }
        }
    }
}
