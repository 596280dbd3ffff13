use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::FileReader;
use crate::domain::{entities::Property, value_objects::Address};

/// DTO for the create-property request. Every field is optional on the wire
/// so that missing data is reported by validation rather than by the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub address: Option<AddressRequest>,
    /// Raw JSON value; anything but a finite non-negative number is rejected
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
}

/// DTO for the address part of a create request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Pagination input for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub page: i64,
    pub limit: i64,
}

impl ListParams {
    /// Rows to skip for this page (pages start at 1). Saturates at
    /// `i64::MAX`, which simply yields an empty page.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit.max(0))
    }
}

/// One page of results plus the total number of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl<T> Paginated<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// DTO for address responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub formatted: String,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number().to_string(),
            district: address.district().to_string(),
            city: address.city().to_string(),
            state: address.state().to_string(),
            zip_code: address.zip_code().to_string(),
            formatted: address.format(),
        }
    }
}

/// DTO for property responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: String,
    pub description: String,
    pub photos: Vec<String>,
    pub address: AddressDto,
    pub price: f64,
    pub created_at: String,
}

impl From<Property> for PropertyDto {
    fn from(property: Property) -> Self {
        Self {
            id: property.id().to_string(),
            description: property.description().to_string(),
            photos: property.photos().to_vec(),
            address: AddressDto::from(property.address()),
            price: property.price(),
            created_at: property.created_at().to_rfc3339(),
        }
    }
}

/// DTO for list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyListResponse {
    pub data: Vec<PropertyDto>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl From<Paginated<Property>> for PropertyListResponse {
    fn from(page: Paginated<Property>) -> Self {
        let page = page.map(PropertyDto::from);
        Self {
            data: page.data,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// A single photo to upload: its byte stream and the client's file name
pub struct PhotoUpload {
    pub reader: FileReader,
    pub original_name: String,
}

impl PhotoUpload {
    pub fn new(reader: FileReader, original_name: impl Into<String>) -> Self {
        Self {
            reader,
            original_name: original_name.into(),
        }
    }
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("original_name", &self.original_name)
            .finish_non_exhaustive()
    }
}

/// DTO for photo upload responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadPhotosResponse {
    pub urls: Vec<String>,
}
