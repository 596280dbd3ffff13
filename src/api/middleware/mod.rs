pub mod cors;
pub mod request_logging;
pub mod validation;

pub use request_logging::request_logging_middleware;
pub use validation::ValidatedQuery;
