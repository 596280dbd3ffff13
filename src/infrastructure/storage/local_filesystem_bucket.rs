use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::ports::{
    DeleteFileGateway, FileReader, GetFileGateway, StorageError, UploadFileGateway,
};
use crate::infrastructure::storage::path_builder::{public_url, PathBuilder};

/// Buffer size for writing uploads to disk
const BUFFER_SIZE: usize = 256 * 1024;

/// Bucket backed by a local directory. Used in development and tests.
pub struct LocalFilesystemBucket {
    path_builder: PathBuilder,
    public_base_url: String,
    durable_writes: bool,
}

impl LocalFilesystemBucket {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self::with_durability(root, public_base_url, true)
    }

    pub fn with_durability(
        root: PathBuf,
        public_base_url: impl Into<String>,
        durable_writes: bool,
    ) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            public_base_url: public_base_url.into(),
            durable_writes,
        }
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.path_builder.temp_root()).await?;
        fs::create_dir_all(self.path_builder.objects_root()).await?;
        Ok(())
    }

    /// Directory that stored objects live under; served read-only over HTTP
    pub fn objects_root(&self) -> PathBuf {
        self.path_builder.objects_root()
    }

    async fn write_temp(&self, temp_path: &Path, mut reader: FileReader) -> Result<u64, StorageError> {
        let mut file = BufWriter::with_capacity(BUFFER_SIZE, File::create(temp_path).await?);
        let size = tokio::io::copy(&mut reader, &mut file).await?;
        file.flush().await?;

        if self.durable_writes {
            file.get_ref().sync_all().await?;
        }
        Ok(size)
    }

    async fn sync_parent(&self, path: &Path) {
        if !self.durable_writes {
            return;
        }
        if let Some(parent) = path.parent() {
            match File::open(parent).await {
                Ok(dir) => {
                    if let Err(e) = dir.sync_all().await {
                        warn!("Failed to sync parent directory after rename: {}", e);
                    }
                }
                Err(e) => warn!("Failed to open parent directory for sync: {}", e),
            }
        }
    }
}

#[async_trait]
impl UploadFileGateway for LocalFilesystemBucket {
    async fn upload_file(
        &self,
        reader: FileReader,
        original_name: &str,
        destination_path: &str,
    ) -> Result<String, StorageError> {
        let final_path = self.path_builder.final_path(destination_path)?;
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());

        info!(
            file = %original_name,
            path = %destination_path,
            "Uploading file to local bucket"
        );

        // 1. Stream to a temp file
        let size = match self.write_temp(&temp_path, reader).await {
            Ok(size) => size,
            Err(e) => {
                warn!("Failed to write upload to temp file {:?}: {}", temp_path, e);
                let _ = fs::remove_file(&temp_path).await;
                return Err(e);
            }
        };

        // 2. Move into place (atomic)
        if let Some(parent) = final_path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                let _ = fs::remove_file(&temp_path).await;
                return Err(StorageError::Io(e));
            }
        }
        debug!("Moving upload to final location: {:?}", final_path);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(e));
        }
        self.sync_parent(&final_path).await;

        info!(path = %destination_path, size, "File uploaded successfully");
        Ok(public_url(&self.public_base_url, destination_path))
    }
}

#[async_trait]
impl GetFileGateway for LocalFilesystemBucket {
    async fn get_file(&self, path: &str) -> Result<bool, StorageError> {
        let final_path = self.path_builder.final_path(path)?;

        match fs::metadata(&final_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[async_trait]
impl DeleteFileGateway for LocalFilesystemBucket {
    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        if !self.get_file(path).await? {
            warn!(path = %path, "File not found");
            return Err(StorageError::NotFound(path.to_string()));
        }

        let final_path = self.path_builder.final_path(path)?;
        fs::remove_file(&final_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(path.to_string())
            } else {
                StorageError::Io(e)
            }
        })?;

        info!(path = %path, "File deleted from local bucket");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn bucket(dir: &TempDir) -> LocalFilesystemBucket {
        let bucket = LocalFilesystemBucket::with_durability(
            dir.path().to_path_buf(),
            "http://localhost:8080/files",
            false,
        );
        bucket.init().await.unwrap();
        bucket
    }

    fn reader(content: &'static [u8]) -> FileReader {
        Box::pin(std::io::Cursor::new(content))
    }

    #[tokio::test]
    async fn test_init_creates_directories() {
        let dir = TempDir::new().unwrap();
        let _bucket = bucket(&dir).await;

        assert!(dir.path().join("objects").exists());
        assert!(dir.path().join("temp").exists());
    }

    #[tokio::test]
    async fn test_upload_writes_file_and_returns_url() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;

        let url = bucket
            .upload_file(reader(b"Hello, World!"), "a.jpg", "photos/1-a.jpg")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/files/photos/1-a.jpg");
        let stored = std::fs::read(dir.path().join("objects/photos/1-a.jpg")).unwrap();
        assert_eq!(stored, b"Hello, World!");
        // Temp dir is left empty after the rename
        assert_eq!(std::fs::read_dir(dir.path().join("temp")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_get_file_reports_existence() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;

        assert!(!bucket.get_file("photos/1-a.jpg").await.unwrap());
        bucket
            .upload_file(reader(b"data"), "a.jpg", "photos/1-a.jpg")
            .await
            .unwrap();
        assert!(bucket.get_file("photos/1-a.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_file_on_directory_is_false() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;
        bucket
            .upload_file(reader(b"data"), "a.jpg", "photos/1-a.jpg")
            .await
            .unwrap();

        assert!(!bucket.get_file("photos").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;
        bucket
            .upload_file(reader(b"to be deleted"), "a.jpg", "photos/1-a.jpg")
            .await
            .unwrap();

        bucket.delete_file("photos/1-a.jpg").await.unwrap();

        assert!(!bucket.get_file("photos/1-a.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;

        let err = bucket.delete_file("photos/missing.jpg").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(ref p) if p == "photos/missing.jpg"));
        assert_eq!(err.to_string(), "File not found: photos/missing.jpg");
    }

    #[tokio::test]
    async fn test_escaping_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        let bucket = bucket(&dir).await;

        let err = bucket
            .upload_file(reader(b"x"), "x", "../outside.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidPath(_)));
        assert!(!dir.path().join("outside.txt").exists());
    }
}
