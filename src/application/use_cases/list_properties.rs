use std::sync::Arc;
use tracing::error;

use crate::application::dto::{ListParams, Paginated};
use crate::application::errors::{UseCaseError, UseCaseResult};
use crate::application::ports::PropertyGateway;
use crate::domain::entities::Property;

/// Use case: List properties
pub struct ListPropertiesUseCase {
    property_repo: Arc<dyn PropertyGateway>,
}

impl ListPropertiesUseCase {
    pub fn new(property_repo: Arc<dyn PropertyGateway>) -> Self {
        Self { property_repo }
    }

    /// Execute list with pagination. Any repository failure becomes an
    /// internal server error carrying the original error text.
    pub async fn execute(&self, page: i64, limit: i64) -> UseCaseResult<Paginated<Property>> {
        self.property_repo
            .list_all(ListParams { page, limit })
            .await
            .map_err(|e| {
                error!(error = %e, page, limit, "Failed to list properties");
                UseCaseError::InternalServerError(format!("Failed to list properties: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockPropertyGateway, RepositoryError};

    #[tokio::test]
    async fn test_list_properties_happy_path() {
        // Arrange
        let mut mock_repo = MockPropertyGateway::new();
        mock_repo
            .expect_list_all()
            .withf(|params| *params == ListParams { page: 2, limit: 5 })
            .times(1)
            .returning(|params| {
                Ok(Paginated {
                    data: vec![],
                    total: 7,
                    page: params.page,
                    limit: params.limit,
                })
            });

        let use_case = ListPropertiesUseCase::new(Arc::new(mock_repo));

        // Act
        let result = use_case.execute(2, 5).await;

        // Assert
        let page = result.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 7);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 5);
    }

    #[tokio::test]
    async fn test_list_properties_repository_error_becomes_internal() {
        // Arrange
        let mut mock_repo = MockPropertyGateway::new();
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(|_| Err(RepositoryError::Internal("Database error".to_string())));

        let use_case = ListPropertiesUseCase::new(Arc::new(mock_repo));

        // Act
        let result = use_case.execute(1, 10).await;

        // Assert
        match result.unwrap_err() {
            UseCaseError::InternalServerError(msg) => {
                assert!(msg.starts_with("Failed to list properties: "));
                assert!(msg.contains("Internal error: Database error"));
            }
            other => panic!("Expected InternalServerError, got {:?}", other),
        }
    }
}
