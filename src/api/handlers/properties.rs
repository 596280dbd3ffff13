use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::middleware::ValidatedQuery;
use crate::application::dto::{CreatePropertyRequest, PropertyDto, PropertyListResponse};
use crate::application::use_cases::{
    CreatePropertyUseCase, DeletePropertyUseCase, FindPropertyUseCase, ListPropertiesUseCase,
};

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, starting at 1 (default: 1)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: i64,
    /// Results per page (default: 10, max: 100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

/// POST /v1/properties
/// Create a property
#[utoipa::path(
    post,
    path = "/v1/properties",
    tag = "properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created", body = PropertyDto),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_property_handler(
    State(use_case): State<Arc<CreatePropertyUseCase>>,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PropertyDto>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let property = use_case.execute(request).await?;

    Ok((StatusCode::CREATED, Json(PropertyDto::from(property))))
}

/// GET /v1/properties
/// List properties with pagination
#[utoipa::path(
    get,
    path = "/v1/properties",
    tag = "properties",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of properties", body = PropertyListResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_properties_handler(
    State(use_case): State<Arc<ListPropertiesUseCase>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<PropertyListResponse>, ApiError> {
    let page = use_case.execute(query.page, query.limit).await?;

    Ok(Json(PropertyListResponse::from(page)))
}

/// GET /v1/properties/{id}
/// Find a property by id
#[utoipa::path(
    get,
    path = "/v1/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Property found", body = PropertyDto),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn find_property_handler(
    State(use_case): State<Arc<FindPropertyUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<PropertyDto>, ApiError> {
    let property = use_case.execute(&id).await?;

    Ok(Json(PropertyDto::from(property)))
}

/// DELETE /v1/properties/{id}
/// Delete a property by id
#[utoipa::path(
    delete,
    path = "/v1/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_property_handler(
    State(use_case): State<Arc<DeletePropertyUseCase>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    use_case.execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
