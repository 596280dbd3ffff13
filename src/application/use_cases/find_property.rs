use std::sync::Arc;

use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::ports::PropertyGateway;
use crate::domain::entities::Property;

/// Use case: Find a property by id
pub struct FindPropertyUseCase {
    property_repo: Arc<dyn PropertyGateway>,
}

impl FindPropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyGateway>) -> Self {
        Self { property_repo }
    }

    pub async fn execute(&self, id: &str) -> UseCaseResult<Property> {
        self.property_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound("Property not found".to_string()))
    }
}
