use std::sync::Arc;
use tracing::info;

use crate::application::dto::CreatePropertyRequest;
use crate::application::errors::UseCaseResult;
use crate::application::factory::CreatePropertyFactory;
use crate::application::ports::PropertyGateway;
use crate::domain::entities::Property;

/// Use case: Create a property
pub struct CreatePropertyUseCase {
    property_repo: Arc<dyn PropertyGateway>,
}

impl CreatePropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyGateway>) -> Self {
        Self { property_repo }
    }

    /// Validate the request, then persist. Repository failures are returned as-is.
    pub async fn execute(&self, request: CreatePropertyRequest) -> UseCaseResult<Property> {
        // 1. Build and validate the entity
        let property = CreatePropertyFactory::create(request)?;

        // 2. Persist
        let created = self.property_repo.create(&property).await?;

        info!(property_id = %created.id(), "Property created");
        Ok(created)
    }
}
