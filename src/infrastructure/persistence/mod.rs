mod postgres_property_repository;

pub use postgres_property_repository::PostgresPropertyRepository;
