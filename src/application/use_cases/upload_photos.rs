use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::dto::PhotoUpload;
use crate::application::errors::UseCaseResult;
use crate::application::ports::UploadFileGateway;

/// Prefix under which every uploaded photo is stored
pub const PHOTOS_PREFIX: &str = "photos";

/// Use case: Upload property photos
///
/// Files are uploaded one at a time in input order. The first failure aborts
/// the batch; URLs of files already uploaded are not returned.
pub struct UploadPhotosUseCase {
    upload_gateway: Arc<dyn UploadFileGateway>,
}

impl UploadPhotosUseCase {
    pub fn new(upload_gateway: Arc<dyn UploadFileGateway>) -> Self {
        Self { upload_gateway }
    }

    pub async fn execute(&self, files: Vec<PhotoUpload>) -> UseCaseResult<Vec<String>> {
        let mut urls = Vec::with_capacity(files.len());

        for file in files {
            let destination_path = destination_path(&file.original_name);
            debug!(path = %destination_path, "Uploading photo");

            let url = self
                .upload_gateway
                .upload_file(file.reader, &file.original_name, &destination_path)
                .await?;
            urls.push(url);
        }

        info!(count = urls.len(), "Photos uploaded");
        Ok(urls)
    }
}

/// `photos/<unix millis>-<original name>`
fn destination_path(original_name: &str) -> String {
    format!(
        "{}/{}-{}",
        PHOTOS_PREFIX,
        Utc::now().timestamp_millis(),
        original_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::UseCaseError;
    use crate::application::ports::{FileReader, MockUploadFileGateway, StorageError};
    use mockall::Sequence;
    use std::io::Cursor;

    fn photo(name: &str) -> PhotoUpload {
        let reader: FileReader = Box::pin(Cursor::new(b"image bytes".to_vec()));
        PhotoUpload::new(reader, name)
    }

    fn is_photo_path(path: &str, name: &str) -> bool {
        let Some(rest) = path.strip_prefix("photos/") else {
            return false;
        };
        let Some((millis, file)) = rest.split_once('-') else {
            return false;
        };
        millis.parse::<i64>().is_ok() && file == name
    }

    #[tokio::test]
    async fn test_upload_empty_batch_calls_nothing() {
        // Arrange
        let mut mock_gateway = MockUploadFileGateway::new();
        mock_gateway.expect_upload_file().never();

        let use_case = UploadPhotosUseCase::new(Arc::new(mock_gateway));

        // Act
        let urls = use_case.execute(vec![]).await.unwrap();

        // Assert
        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn test_upload_preserves_input_order() {
        // Arrange
        let mut mock_gateway = MockUploadFileGateway::new();
        let mut seq = Sequence::new();

        mock_gateway
            .expect_upload_file()
            .withf(|_, name, path| name == "photo1.jpg" && is_photo_path(path, "photo1.jpg"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok("http://bucket/photo1.jpg".to_string()));
        mock_gateway
            .expect_upload_file()
            .withf(|_, name, path| name == "photo2.jpg" && is_photo_path(path, "photo2.jpg"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok("http://bucket/photo2.jpg".to_string()));

        let use_case = UploadPhotosUseCase::new(Arc::new(mock_gateway));

        // Act
        let urls = use_case
            .execute(vec![photo("photo1.jpg"), photo("photo2.jpg")])
            .await
            .unwrap();

        // Assert
        assert_eq!(
            urls,
            vec![
                "http://bucket/photo1.jpg".to_string(),
                "http://bucket/photo2.jpg".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_batch() {
        // Arrange
        let mut mock_gateway = MockUploadFileGateway::new();
        let mut seq = Sequence::new();

        mock_gateway
            .expect_upload_file()
            .withf(|_, name, _| name == "photo1.jpg")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok("http://bucket/photo1.jpg".to_string()));
        mock_gateway
            .expect_upload_file()
            .withf(|_, name, _| name == "photo2.jpg")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(StorageError::Backend("Upload failed".to_string())));

        let use_case = UploadPhotosUseCase::new(Arc::new(mock_gateway));

        // Act
        let result = use_case
            .execute(vec![photo("photo1.jpg"), photo("photo2.jpg"), photo("photo3.jpg")])
            .await;

        // Assert
        match result.unwrap_err() {
            UseCaseError::Storage(StorageError::Backend(msg)) => assert_eq!(msg, "Upload failed"),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_destination_path_format() {
        let path = destination_path("house.png");
        assert!(is_photo_path(&path, "house.png"), "unexpected path {}", path);
    }

    #[test]
    fn test_destination_path_keeps_dashes_in_name() {
        let path = destination_path("front-door.png");
        assert!(path.starts_with("photos/"));
        assert!(path.ends_with("-front-door.png"));
    }
}
