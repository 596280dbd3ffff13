//! Error type shared by every use case
//!
//! Validation failures, missing records, and infrastructure failures all flow
//! through [`UseCaseError`] so callers branch on one type instead of a mix of
//! returned and raised errors.

use thiserror::Error;

use crate::application::ports::{RepositoryError, StorageError};
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Client-supplied data failed validation
    #[error("{0}")]
    BadRequest(#[from] DomainError),

    /// Requested property or file does not exist
    #[error("{0}")]
    NotFound(String),

    /// Dependency failure normalized to hide internal detail
    #[error("{0}")]
    InternalServerError(String),

    /// Repository failure passed through unchanged
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Storage failure passed through unchanged
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type UseCaseResult<T> = Result<T, UseCaseError>;

impl UseCaseError {
    pub fn internal_server_error() -> Self {
        Self::InternalServerError("Internal Server Error".to_string())
    }
}
