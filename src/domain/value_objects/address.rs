use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::validation::Validation;

/// Raw address fields as supplied by a caller or loaded from storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressProps {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Validated postal address. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: String,
    district: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Validate fields in declaration order and stop at the first failure.
    ///
    /// The state must be two ASCII letters and is stored trimmed and
    /// upper-cased; every other field is kept verbatim.
    pub fn create(props: AddressProps) -> DomainResult<Self> {
        Validation::validate_not_empty(&props.street, "street", "Street is required")?;
        Validation::validate_not_empty(&props.number, "number", "Number is required")?;
        Validation::validate_not_empty(&props.district, "district", "District is required")?;
        Validation::validate_not_empty(&props.city, "city", "City is required")?;
        Validation::validate_letter_code(
            &props.state,
            "state",
            2,
            "State must be a 2-letter code",
        )?;
        Validation::validate_zip_code(&props.zip_code, "zip_code", "Invalid zip code format")?;

        Ok(Self {
            street: props.street,
            number: props.number,
            district: props.district,
            city: props.city,
            state: props.state.trim().to_uppercase(),
            zip_code: props.zip_code,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Copy of the stored fields
    pub fn to_props(&self) -> AddressProps {
        AddressProps {
            street: self.street.clone(),
            number: self.number.clone(),
            district: self.district.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    /// Single-line human readable form
    pub fn format(&self) -> String {
        format!(
            "{}, {} - {}, {}/{}, {}",
            self.street, self.number, self.district, self.city, self.state, self.zip_code
        )
    }
}
