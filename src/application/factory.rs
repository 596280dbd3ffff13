use crate::application::dto::{AddressRequest, CreatePropertyRequest};
use crate::domain::{
    entities::{Property, PropertyProps},
    errors::DomainResult,
    value_objects::{Address, AddressProps},
};

/// Assembles a [`Property`] from a raw create request.
///
/// Checks run in a fixed order and the first failure is returned:
/// description, photos, address presence, address fields, price.
pub struct CreatePropertyFactory;

impl CreatePropertyFactory {
    pub fn create(request: CreatePropertyRequest) -> DomainResult<Property> {
        let description = request.description.unwrap_or_default();
        Property::validate_description(&description)?;

        let photos = request.photos.unwrap_or_default();
        Property::validate_photos(&photos)?;

        let address = request.address.ok_or_else(Property::address_required)?;
        let address = Address::create(address_props(address))?;

        let price = parse_price(request.price.as_ref())?;

        Property::create(
            PropertyProps {
                description,
                photos,
                address: Some(address),
                price,
                created_at: None,
            },
            None,
        )
    }
}

fn address_props(request: AddressRequest) -> AddressProps {
    AddressProps {
        street: request.street.unwrap_or_default(),
        number: request.number.unwrap_or_default(),
        district: request.district.unwrap_or_default(),
        city: request.city.unwrap_or_default(),
        state: request.state.unwrap_or_default(),
        zip_code: request.zip_code.unwrap_or_default(),
    }
}

/// Only JSON numbers are prices; strings, booleans, and missing values are not
fn parse_price(value: Option<&serde_json::Value>) -> DomainResult<f64> {
    let price = value
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(Property::invalid_price)?;
    Property::validate_price(price)?;
    Ok(price)
}
