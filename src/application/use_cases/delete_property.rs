use std::sync::Arc;
use tracing::info;

use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::ports::PropertyGateway;

/// Use case: Delete a property
pub struct DeletePropertyUseCase {
    property_repo: Arc<dyn PropertyGateway>,
}

impl DeletePropertyUseCase {
    pub fn new(property_repo: Arc<dyn PropertyGateway>) -> Self {
        Self { property_repo }
    }

    /// Execute delete workflow
    pub async fn execute(&self, id: &str) -> UseCaseResult<bool> {
        // 1. Make sure it exists
        if self.property_repo.find_by_id(id).await?.is_none() {
            return Err(UseCaseError::NotFound(format!("Property {} not found", id)));
        }

        // 2. Delete
        self.property_repo.delete(id).await?;

        info!(property_id = %id, "Property deleted");
        Ok(true)
    }
}
