use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::errors::ApiError;
use crate::application::dto::{PhotoUpload, UploadPhotosResponse};
use crate::application::use_cases::{DeletePhotoUseCase, UploadPhotosUseCase};

/// Multipart field carrying the photo files
pub const PHOTOS_FIELD: &str = "photos";

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotosForm {
    /// One or more image files
    #[schema(value_type = Vec<String>, format = Binary)]
    photos: Vec<Vec<u8>>,
}

fn multipart_error(err: MultipartError) -> ApiError {
    ApiError::new(err.status(), err.body_text())
}

/// Keep only the final path segment of a client-supplied file name
fn base_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or("file")
}

/// POST /v1/photos
/// Upload photos (multipart field `photos`, repeatable)
#[utoipa::path(
    post,
    path = "/v1/photos",
    tag = "photos",
    request_body(content = UploadPhotosForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photos uploaded", body = UploadPhotosResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 413, description = "Upload too large"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_photos_handler(
    State(use_case): State<Arc<UploadPhotosUseCase>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadPhotosResponse>), ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(PHOTOS_FIELD) {
            continue;
        }
        let original_name = base_name(field.file_name().unwrap_or_default()).to_string();
        let content = field.bytes().await.map_err(multipart_error)?;
        debug!(file = %original_name, size = content.len(), "Received photo");

        files.push(PhotoUpload::new(Box::pin(Cursor::new(content)), original_name));
    }

    let urls = use_case.execute(files).await?;

    Ok((StatusCode::CREATED, Json(UploadPhotosResponse { urls })))
}

/// DELETE /v1/photos/{path}
/// Delete a stored photo by its bucket path
#[utoipa::path(
    delete,
    path = "/v1/photos/{path}",
    tag = "photos",
    params(
        ("path" = String, Path, description = "Bucket path, e.g. photos/1700000000000-house.jpg")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 500, description = "Photo missing or could not be deleted")
    )
)]
pub async fn delete_photo_handler(
    State(use_case): State<Arc<DeletePhotoUseCase>>,
    Path(path): Path<String>,
) -> Result<StatusCode, ApiError> {
    use_case.execute(&path).await?;

    Ok(StatusCode::NO_CONTENT)
}
