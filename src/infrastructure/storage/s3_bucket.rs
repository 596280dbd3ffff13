use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};

use crate::application::ports::{
    DeleteFileGateway, FileReader, GetFileGateway, StorageError, UploadFileGateway,
};
use crate::infrastructure::storage::path_builder::{public_url, validate_key};

/// Bucket backed by an S3-compatible object store (AWS S3, MinIO, or the
/// Google Cloud Storage interoperability endpoint).
#[derive(Clone, Debug)]
pub struct S3Bucket {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Bucket {
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Build a client from the ambient AWS configuration, optionally pointed
    /// at a custom endpoint (path-style addressing for non-AWS services).
    pub async fn connect(
        bucket: impl Into<String>,
        endpoint_url: Option<&str>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let shared = aws_config::load_from_env().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        let client = aws_sdk_s3::Client::from_conf(builder.build());
        Self::new(client, bucket, public_base_url)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl UploadFileGateway for S3Bucket {
    #[tracing::instrument(skip(self, reader), fields(bucket = %self.bucket))]
    async fn upload_file(
        &self,
        mut reader: FileReader,
        original_name: &str,
        destination_path: &str,
    ) -> Result<String, StorageError> {
        let key = validate_key(destination_path)?;

        // PutObject needs the content length up front; an unsized stream
        // would need a multipart upload instead
        let mut content = Vec::new();
        reader.read_to_end(&mut content).await?;

        info!(
            size = content.len(),
            "Uploading file to bucket {} at path {}", self.bucket, key
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type_for(original_name))
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to upload file");
                StorageError::Backend(format!("put {}: {}", key, e))
            })?;

        info!("File {} uploaded to {}/{} successfully", original_name, self.bucket, key);
        Ok(public_url(&self.public_base_url, key))
    }
}

#[async_trait]
impl GetFileGateway for S3Bucket {
    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    async fn get_file(&self, path: &str) -> Result<bool, StorageError> {
        let key = validate_key(path)?;
        let resp = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        if let Err(e) = resp {
            if e.as_service_error().map(|e| e.is_not_found()) == Some(true) {
                return Ok(false);
            }
            return Err(StorageError::Backend(format!("head {}: {}", key, e)));
        }

        Ok(true)
    }
}

#[async_trait]
impl DeleteFileGateway for S3Bucket {
    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        if !self.get_file(path).await? {
            warn!("File: {} not found.", path);
            return Err(StorageError::NotFound(path.to_string()));
        }

        info!("Deleting file {} from bucket {}", path, self.bucket);
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete file");
                StorageError::Backend(format!("delete {}: {}", path, e))
            })?;

        info!("File {} deleted from bucket {}", path, self.bucket);
        Ok(())
    }
}

/// Content type from the file extension; unknown types are sent as binary
fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_images() {
        assert_eq!(content_type_for("house.JPG"), "image/jpeg");
        assert_eq!(content_type_for("house.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("front.png"), "image/png");
        assert_eq!(content_type_for("a.b.webp"), "image/webp");
    }

    #[test]
    fn test_content_type_for_unknown() {
        assert_eq!(content_type_for("README"), "application/octet-stream");
        assert_eq!(content_type_for("doc.pdf"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_invalid_key_rejected_before_any_request() {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        let bucket = S3Bucket::new(
            aws_sdk_s3::Client::from_conf(config),
            "bucket",
            "https://storage.googleapis.com/bucket",
        );

        let err = bucket.get_file("../escape").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidPath(_)));

        let reader: FileReader = Box::pin(std::io::Cursor::new(b"x".to_vec()));
        let err = bucket
            .upload_file(reader, "x.png", "/absolute.png")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidPath(_)));
    }
}
