mod create_property;
mod delete_photo;
mod delete_property;
mod find_property;
mod list_properties;
mod upload_photos;

pub use create_property::CreatePropertyUseCase;
pub use delete_photo::DeletePhotoUseCase;
pub use delete_property::DeletePropertyUseCase;
pub use find_property::FindPropertyUseCase;
pub use list_properties::ListPropertiesUseCase;
pub use upload_photos::{UploadPhotosUseCase, PHOTOS_PREFIX};
