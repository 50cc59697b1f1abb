use crate::domain::{models::venue::Venue, ports::VenueRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresVenueRepo {
    pool: PgPool,
}

impl PostgresVenueRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PostgresVenueRepo {
    async fn find_or_create(
        &self,
        venue_id: Option<i64>,
        venue_name: Option<&str>,
    ) -> Result<Venue, AppError> {
        if let Some(id) = venue_id {
            let found = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;
            if let Some(venue) = found {
                return Ok(venue);
            }
        }

        if let Some(name) = venue_name.filter(|name| !name.is_empty()) {
            let found = sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;
            if let Some(venue) = found {
                return Ok(venue);
            }

            return sqlx::query_as::<_, Venue>(
                "INSERT INTO venues (name, address, city, capacity, description)
                 VALUES ($1, 'Address Pending', 'Nairobi', 1000, 'Auto-created venue')
                 RETURNING *",
            )
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database);
        }

        sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (name, address, city, capacity, description)
             VALUES ('Default Venue', 'Nairobi', 'Nairobi', 1000, 'Auto-created default venue')
             RETURNING *",
        )
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
