use thiserror::Error;

/// Errors raised by domain construction and mutation.
///
/// `Validation` is the "bad request" kind: client-supplied data that fails a
/// field rule. Its display form is the field message alone so callers can
/// surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            DomainError::Validation { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation { message, .. } => message,
        }
    }
}

/// Result of any fallible domain operation
pub type DomainResult<T> = Result<T, DomainError>;
