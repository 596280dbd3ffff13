//! # Property Service - Property Listings with Photo Storage
//!
//! Create, find, list, and delete property listings, and upload or remove
//! their photos in an object-storage bucket. Built on Clean Architecture
//! principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business rules (the `Property` entity, the `Address`
//!   value object, validation errors)
//! - **Application**: Use cases, the create-property factory, and ports
//!   (gateway traits)
//! - **Infrastructure**: Postgres repository and bucket adapters
//!   (S3-compatible and local filesystem)
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use property_service::{application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = Config::from_env();
//! let state = ApplicationBuilder::new(config)
//!     .with_database()
//!     .await?
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = property_service::api::create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
