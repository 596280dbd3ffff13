use std::sync::Arc;
use tracing::{error, info};

use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::ports::{DeleteFileGateway, GetFileGateway, StorageError};

/// Use case: Delete a stored photo
///
/// Every failure, including a missing file, is reported as a generic
/// internal server error. The cause is only logged.
pub struct DeletePhotoUseCase {
    get_file_gateway: Arc<dyn GetFileGateway>,
    delete_file_gateway: Arc<dyn DeleteFileGateway>,
}

impl DeletePhotoUseCase {
    pub fn new(
        get_file_gateway: Arc<dyn GetFileGateway>,
        delete_file_gateway: Arc<dyn DeleteFileGateway>,
    ) -> Self {
        Self {
            get_file_gateway,
            delete_file_gateway,
        }
    }

    pub async fn execute(&self, path: &str) -> UseCaseResult<()> {
        match self.remove(path).await {
            Ok(()) => {
                info!(path = %path, "Photo deleted");
                Ok(())
            }
            Err(e) => {
                error!(path = %path, error = %e, "Failed to delete photo");
                Err(UseCaseError::internal_server_error())
            }
        }
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        if !self.get_file_gateway.get_file(path).await? {
            return Err(StorageError::NotFound(path.to_string()));
        }
        self.delete_file_gateway.delete_file(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDeleteFileGateway, MockGetFileGateway};

    fn assert_internal(result: UseCaseResult<()>) {
        match result.unwrap_err() {
            UseCaseError::InternalServerError(msg) => assert_eq!(msg, "Internal Server Error"),
            other => panic!("Expected InternalServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_photo_happy_path() {
        // Arrange
        let mut mock_get = MockGetFileGateway::new();
        let mut mock_delete = MockDeleteFileGateway::new();

        mock_get
            .expect_get_file()
            .withf(|path| path == "photos/1-a.jpg")
            .times(1)
            .returning(|_| Ok(true));
        mock_delete
            .expect_delete_file()
            .withf(|path| path == "photos/1-a.jpg")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeletePhotoUseCase::new(Arc::new(mock_get), Arc::new(mock_delete));

        // Act
        let result = use_case.execute("photos/1-a.jpg").await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_photo_missing_file_is_flattened() {
        // Arrange
        let mut mock_get = MockGetFileGateway::new();
        let mut mock_delete = MockDeleteFileGateway::new();

        mock_get.expect_get_file().times(1).returning(|_| Ok(false));
        mock_delete.expect_delete_file().never();

        let use_case = DeletePhotoUseCase::new(Arc::new(mock_get), Arc::new(mock_delete));

        // Act / Assert
        assert_internal(use_case.execute("photos/missing.jpg").await);
    }

    #[tokio::test]
    async fn test_delete_photo_existence_check_error() {
        let mut mock_get = MockGetFileGateway::new();
        let mut mock_delete = MockDeleteFileGateway::new();

        mock_get
            .expect_get_file()
            .times(1)
            .returning(|_| Err(StorageError::Backend("timeout".to_string())));
        mock_delete.expect_delete_file().never();

        let use_case = DeletePhotoUseCase::new(Arc::new(mock_get), Arc::new(mock_delete));

        assert_internal(use_case.execute("photos/a.jpg").await);
    }

    #[tokio::test]
    async fn test_delete_photo_delete_error() {
        let mut mock_get = MockGetFileGateway::new();
        let mut mock_delete = MockDeleteFileGateway::new();

        mock_get.expect_get_file().times(1).returning(|_| Ok(true));
        mock_delete
            .expect_delete_file()
            .times(1)
            .returning(|path| Err(StorageError::NotFound(path.to_string())));

        let use_case = DeletePhotoUseCase::new(Arc::new(mock_get), Arc::new(mock_delete));

        assert_internal(use_case.execute("photos/a.jpg").await);
    }
}
