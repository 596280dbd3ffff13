use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{DeleteFileGateway, GetFileGateway, PropertyGateway, UploadFileGateway},
    use_cases::{
        CreatePropertyUseCase, DeletePhotoUseCase, DeletePropertyUseCase, FindPropertyUseCase,
        ListPropertiesUseCase, UploadPhotosUseCase,
    },
};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::{
    persistence::PostgresPropertyRepository,
    storage::{LocalFilesystemBucket, S3Bucket},
};

/// Errors raised while wiring the application together
pub type BuildError = Box<dyn std::error::Error + Send + Sync>;

/// The three file gateways, usually backed by one bucket adapter
#[derive(Clone)]
pub struct FileGateways {
    pub upload: Arc<dyn UploadFileGateway>,
    pub get: Arc<dyn GetFileGateway>,
    pub delete: Arc<dyn DeleteFileGateway>,
}

impl FileGateways {
    /// Use one adapter for upload, lookup, and delete
    pub fn from_bucket<B>(bucket: Arc<B>) -> Self
    where
        B: UploadFileGateway + GetFileGateway + DeleteFileGateway + 'static,
    {
        Self {
            upload: bucket.clone(),
            get: bucket.clone(),
            delete: bucket,
        }
    }
}

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    property_repo: Option<Arc<dyn PropertyGateway>>,
    files: Option<FileGateways>,
    local_files_root: Option<PathBuf>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            property_repo: None,
            files: None,
            local_files_root: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, BuildError> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an already constructed repository instead of the Postgres one
    pub fn with_property_repository(mut self, repo: Arc<dyn PropertyGateway>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    /// Use already constructed file gateways instead of the configured bucket
    pub fn with_file_gateways(mut self, files: FileGateways) -> Self {
        self.files = Some(files);
        self
    }

    /// Initialize infrastructure layer (repository and bucket)
    pub async fn with_infrastructure(mut self) -> Result<Self, BuildError> {
        if self.property_repo.is_none() {
            let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;
            self.property_repo = Some(Arc::new(PostgresPropertyRepository::new(pool.clone())));
        }

        if self.files.is_none() {
            let files = match self.config.storage()? {
                StorageBackend::S3 {
                    bucket,
                    endpoint_url,
                    public_base_url,
                } => {
                    info!(bucket = %bucket, endpoint = ?endpoint_url, "Using S3-compatible bucket");
                    let bucket =
                        S3Bucket::connect(bucket, endpoint_url.as_deref(), public_base_url).await;
                    FileGateways::from_bucket(Arc::new(bucket))
                }
                StorageBackend::Local {
                    root,
                    public_base_url,
                } => {
                    info!(root = ?root, "Using local filesystem bucket");
                    let bucket = LocalFilesystemBucket::new(root, public_base_url);
                    bucket.init().await?;
                    self.local_files_root = Some(bucket.objects_root());
                    FileGateways::from_bucket(Arc::new(bucket))
                }
            };
            self.files = Some(files);
        }

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, BuildError> {
        let property_repo = self
            .property_repo
            .ok_or("Property repository not initialized")?;
        let files = self.files.ok_or("File gateways not initialized")?;

        let state = AppState {
            create_property_use_case: Arc::new(CreatePropertyUseCase::new(Arc::clone(
                &property_repo,
            ))),
            find_property_use_case: Arc::new(FindPropertyUseCase::new(Arc::clone(
                &property_repo,
            ))),
            list_properties_use_case: Arc::new(ListPropertiesUseCase::new(Arc::clone(
                &property_repo,
            ))),
            delete_property_use_case: Arc::new(DeletePropertyUseCase::new(property_repo)),
            upload_photos_use_case: Arc::new(UploadPhotosUseCase::new(files.upload)),
            delete_photo_use_case: Arc::new(DeletePhotoUseCase::new(files.get, files.delete)),
            local_files_root: self.local_files_root,
            config: self.config,
        };

        info!("Application layer initialized");
        Ok(state)
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
