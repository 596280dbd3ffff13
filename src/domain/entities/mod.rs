mod entity;
mod property;

pub use entity::Entity;
pub use property::{Property, PropertyProps};
