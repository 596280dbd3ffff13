use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    entities::Entity,
    errors::{DomainError, DomainResult},
    validation::Validation,
    value_objects::{Address, Identity},
};

const DESCRIPTION_REQUIRED: &str = "Description is required.";
const PHOTOS_REQUIRED: &str = "At least one photo is required.";
const ADDRESS_REQUIRED: &str = "Address is required.";
const INVALID_PRICE: &str = "Invalid price value.";

/// Construction input for [`Property::create`]
#[derive(Debug, Clone)]
pub struct PropertyProps {
    pub description: String,
    pub photos: Vec<String>,
    pub address: Option<Address>,
    pub price: f64,
    /// Defaults to the construction instant when absent
    pub created_at: Option<DateTime<Utc>>,
}

/// Property aggregate root - a listed property with its address and photos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    id: Identity,
    description: String,
    photos: Vec<String>,
    address: Address,
    price: f64,
    created_at: DateTime<Utc>,
}

impl Property {
    /// Validate description, photos, address and price (in that order) and
    /// build the entity. A fresh identity is generated when none is given.
    pub fn create(props: PropertyProps, id: Option<Identity>) -> DomainResult<Self> {
        Self::validate_description(&props.description)?;
        Self::validate_photos(&props.photos)?;
        let address = props
            .address
            .ok_or_else(|| DomainError::validation("address", ADDRESS_REQUIRED))?;
        Self::validate_price(props.price)?;

        Ok(Self {
            id: id.unwrap_or_default(),
            description: props.description,
            photos: props.photos,
            address,
            price: props.price,
            created_at: props.created_at.unwrap_or_else(Utc::now),
        })
    }

    /// Reconstruct from storage (e.g., database). Runs the same validation
    /// as [`Property::create`] so a corrupt row never becomes an entity.
    pub fn reconstruct(
        id: Identity,
        description: String,
        photos: Vec<String>,
        address: Address,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::create(
            PropertyProps {
                description,
                photos,
                address: Some(address),
                price,
                created_at: Some(created_at),
            },
            Some(id),
        )
    }

    pub(crate) fn validate_description(description: &str) -> DomainResult<()> {
        Validation::validate_not_empty(description, "description", DESCRIPTION_REQUIRED)
    }

    pub(crate) fn validate_photos(photos: &[String]) -> DomainResult<()> {
        Validation::validate_not_empty_collection(photos, "photos", PHOTOS_REQUIRED)
    }

    pub(crate) fn validate_price(price: f64) -> DomainResult<()> {
        Validation::validate_non_negative(price, "price", INVALID_PRICE)
    }

    pub(crate) fn address_required() -> DomainError {
        DomainError::validation("address", ADDRESS_REQUIRED)
    }

    pub(crate) fn invalid_price() -> DomainError {
        DomainError::validation("price", INVALID_PRICE)
    }

    pub fn update_description(&mut self, description: String) -> DomainResult<()> {
        Self::validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn update_photos(&mut self, photos: Vec<String>) -> DomainResult<()> {
        Self::validate_photos(&photos)?;
        self.photos = photos;
        Ok(())
    }

    pub fn update_price(&mut self, price: f64) -> DomainResult<()> {
        Self::validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Replace the address. The value object is already valid by construction.
    pub fn update_address(&mut self, address: Address) {
        self.address = address;
    }

    // Getters
    pub fn id(&self) -> &Identity {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Property {
    fn identity(&self) -> &Identity {
        &self.id
    }
}
