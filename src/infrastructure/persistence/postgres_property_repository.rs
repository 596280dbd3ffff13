use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::application::dto::{ListParams, Paginated};
use crate::application::ports::{PropertyGateway, RepositoryError};
use crate::domain::entities::Property;
use crate::domain::value_objects::{Address, AddressProps, Identity};

const PROPERTY_COLUMNS: &str = r#"
    id, description, price, photos,
    street, number, district, city, state, zip_code,
    created_at
"#;

pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyGateway for PostgresPropertyRepository {
    async fn create(&self, property: &Property) -> Result<Property, RepositoryError> {
        let row = PropertyRow::from_domain(property);

        let sql = format!(
            r#"
            INSERT INTO properties (
                id, description, price, photos,
                street, number, district, city, state, zip_code,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            PROPERTY_COLUMNS
        );

        let stored = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(row.id)
            .bind(row.description)
            .bind(row.price)
            .bind(row.photos)
            .bind(row.street)
            .bind(row.number)
            .bind(row.district)
            .bind(row.city)
            .bind(row.state)
            .bind(row.zip_code)
            .bind(row.created_at)
            .fetch_one(&self.pool)
            .await?;

        stored.into_domain()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError> {
        let sql = format!("SELECT {} FROM properties WHERE id = $1", PROPERTY_COLUMNS);

        let row = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self, params: ListParams) -> Result<Paginated<Property>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            r#"
            SELECT {}
            FROM properties
            ORDER BY created_at DESC, id
            LIMIT $1 OFFSET $2
            "#,
            PROPERTY_COLUMNS
        );

        let rows = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        debug!(
            total,
            returned = rows.len(),
            page = params.page,
            "Listed properties"
        );

        let data = rows
            .into_iter()
            .map(PropertyRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated {
            data,
            total,
            page: params.page,
            limit: params.limit,
        })
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// Internal row mapping struct; the address is flattened into the row
#[derive(Debug, sqlx::FromRow)]
struct PropertyRow {
    id: String,
    description: String,
    price: f64,
    photos: Vec<String>,
    street: String,
    number: String,
    district: String,
    city: String,
    state: String,
    zip_code: String,
    created_at: DateTime<Utc>,
}

impl PropertyRow {
    fn from_domain(property: &Property) -> Self {
        let address = property.address();
        Self {
            id: property.id().to_string(),
            description: property.description().to_string(),
            price: property.price(),
            photos: property.photos().to_vec(),
            street: address.street().to_string(),
            number: address.number().to_string(),
            district: address.district().to_string(),
            city: address.city().to_string(),
            state: address.state().to_string(),
            zip_code: address.zip_code().to_string(),
            created_at: property.created_at(),
        }
    }

    fn into_domain(self) -> Result<Property, RepositoryError> {
        let address = Address::create(AddressProps {
            street: self.street,
            number: self.number,
            district: self.district,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        })
        .map_err(|e| RepositoryError::Mapping(format!("Invalid address for {}: {}", self.id, e)))?;

        let id = Identity::from_string(self.id);
        Property::reconstruct(
            id.clone(),
            self.description,
            self.photos,
            address,
            self.price,
            self.created_at,
        )
        .map_err(|e| RepositoryError::Mapping(format!("Invalid property {}: {}", id, e)))
    }
}
