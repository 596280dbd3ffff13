use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{health::HealthResponse, photos::UploadPhotosForm};
use crate::application::dto::{
    AddressDto, AddressRequest, CreatePropertyRequest, PropertyDto, PropertyListResponse,
    UploadPhotosResponse,
};

/// OpenAPI specification for the property service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property Service API",
        version = "1.0.0",
        description = "Property listings with photo storage"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::properties::create_property_handler,
        crate::api::handlers::properties::list_properties_handler,
        crate::api::handlers::properties::find_property_handler,
        crate::api::handlers::properties::delete_property_handler,
        crate::api::handlers::photos::upload_photos_handler,
        crate::api::handlers::photos::delete_photo_handler,
    ),
    components(
        schemas(
            HealthResponse,
            CreatePropertyRequest,
            AddressRequest,
            AddressDto,
            PropertyDto,
            PropertyListResponse,
            UploadPhotosForm,
            UploadPhotosResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "properties", description = "Property listings"),
        (name = "photos", description = "Photo upload and removal")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
