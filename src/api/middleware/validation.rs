use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::api::errors::ApiError;

/// Query string extractor that runs `validator` rules after deserializing
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::bad_request(validation_message(&errors)))?;

        Ok(ValidatedQuery(value))
    }
}

/// Flatten field errors into one message, ordered by field name
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|cow| cow.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    messages.sort();

    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct PageQuery {
        #[validate(range(min = 1, message = "page must be at least 1"))]
        page: i64,
        #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
        limit: i64,
    }

    async fn handler(ValidatedQuery(query): ValidatedQuery<PageQuery>) -> String {
        format!("{}:{}", query.page, query.limit)
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/", get(handler));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_query_passes() {
        let (status, body) = call("/?page=2&limit=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2:5");
    }

    #[tokio::test]
    async fn test_rule_violation_is_400() {
        let (status, body) = call("/?page=0&limit=500").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("limit must be between 1 and 100"));
        assert!(body.contains("page must be at least 1"));
    }

    #[tokio::test]
    async fn test_unparseable_query_is_400() {
        let (status, _) = call("/?page=abc&limit=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
