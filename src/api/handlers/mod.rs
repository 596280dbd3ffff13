pub mod health;
pub mod photos;
pub mod properties;

pub use health::health_handler;
pub use photos::{delete_photo_handler, upload_photos_handler};
pub use properties::{
    create_property_handler, delete_property_handler, find_property_handler,
    list_properties_handler,
};
