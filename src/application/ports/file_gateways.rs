use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    /// Failure reported by the remote bucket service
    #[error("Bucket error: {0}")]
    Backend(String),

    #[error("Invalid storage path: {0}")]
    InvalidPath(String),
}

/// Type alias for the byte stream of an uploaded file
pub type FileReader = Pin<Box<dyn AsyncRead + Send>>;

/// Port for writing a file to the bucket
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadFileGateway: Send + Sync {
    /// Store the stream at `destination_path` and return its public URL
    async fn upload_file(
        &self,
        reader: FileReader,
        original_name: &str,
        destination_path: &str,
    ) -> Result<String, StorageError>;
}

/// Port for checking that a file exists in the bucket
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GetFileGateway: Send + Sync {
    /// `Ok(false)` when the file is absent; errors only for genuine I/O failures
    async fn get_file(&self, path: &str) -> Result<bool, StorageError>;
}

/// Port for removing a file from the bucket
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeleteFileGateway: Send + Sync {
    /// Fails with [`StorageError::NotFound`] when the file is absent
    async fn delete_file(&self, path: &str) -> Result<(), StorageError>;
}
