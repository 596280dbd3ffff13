use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{
    create_property_handler, delete_photo_handler, delete_property_handler,
    find_property_handler, health_handler, list_properties_handler, upload_photos_handler,
};
use crate::api::middleware::{cors, request_logging_middleware};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CreatePropertyUseCase, DeletePhotoUseCase, DeletePropertyUseCase, FindPropertyUseCase,
    ListPropertiesUseCase, UploadPhotosUseCase,
};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub create_property_use_case: Arc<CreatePropertyUseCase>,
    pub find_property_use_case: Arc<FindPropertyUseCase>,
    pub list_properties_use_case: Arc<ListPropertiesUseCase>,
    pub delete_property_use_case: Arc<DeletePropertyUseCase>,
    pub upload_photos_use_case: Arc<UploadPhotosUseCase>,
    pub delete_photo_use_case: Arc<DeletePhotoUseCase>,
    /// Directory served under `/files` when photos live on local disk
    pub local_files_root: Option<PathBuf>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer_for_config(&state.config);
    let max_upload_bytes = state.config.max_upload_bytes;

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/v1/properties",
            post(create_property_handler).with_state(Arc::clone(&state.create_property_use_case)),
        )
        .route(
            "/v1/properties",
            get(list_properties_handler).with_state(Arc::clone(&state.list_properties_use_case)),
        )
        .route(
            "/v1/properties/{id}",
            get(find_property_handler).with_state(Arc::clone(&state.find_property_use_case)),
        )
        .route(
            "/v1/properties/{id}",
            delete(delete_property_handler)
                .with_state(Arc::clone(&state.delete_property_use_case)),
        )
        .route(
            "/v1/photos",
            post(upload_photos_handler)
                .with_state(Arc::clone(&state.upload_photos_use_case))
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/v1/photos/{*path}",
            delete(delete_photo_handler).with_state(Arc::clone(&state.delete_photo_use_case)),
        )
        .merge(swagger_ui());

    if let Some(root) = state.local_files_root {
        router = router.nest_service("/files", ServeDir::new(root));
    }

    router
        .layer(cors_layer)
        .layer(axum_middleware::from_fn(request_logging_middleware))
}
