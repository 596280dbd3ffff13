use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::{ListParams, Paginated};
use crate::domain::entities::Property;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be turned back into a valid entity
    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for property persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyGateway: Send + Sync {
    /// Persist a new property and return the stored record
    async fn create(&self, property: &Property) -> Result<Property, RepositoryError>;

    /// Find a property by id; `Ok(None)` when no record matches
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError>;

    /// List one page of properties together with the total count
    async fn list_all(&self, params: ListParams) -> Result<Paginated<Property>, RepositoryError>;

    /// Delete property by id (hard delete)
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
