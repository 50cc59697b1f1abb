use crate::domain::{
    models::event::{Event, NewEvent, OrganizerEventRow, PublishedEventRow, EVENT_STATUS_PUBLISHED},
    models::ticket_type::TicketCategory,
    ports::EventRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, event: NewEvent) -> Result<Event, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                organizer_id, venue_id, title, description, category, event_date,
                standard_price, vip_price, image_url, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *"#,
        )
            .bind(event.organizer_id)
            .bind(event.venue_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.category)
            .bind(event.event_date)
            .bind(event.standard_price)
            .bind(event.vip_price)
            .bind(&event.image_url)
            .bind(&event.status)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for category in TicketCategory::ALL {
            sqlx::query(
                "INSERT INTO ticket_types (event_id, type_name, price, available_quantity, sold_quantity)
                 VALUES ($1, $2, $3, $4, 0)",
            )
                .bind(created.id)
                .bind(category.type_name())
                .bind(category.unit_price(&created))
                .bind(category.default_available())
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_published(&self, id: i64) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(EVENT_STATUS_PUBLISHED)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_published_upcoming(&self) -> Result<Vec<PublishedEventRow>, AppError> {
        sqlx::query_as::<_, PublishedEventRow>(
            r#"SELECT e.*, v.name AS venue_name, v.address, v.city,
                (SELECT COUNT(*) FROM ticket_types tt
                  WHERE tt.event_id = e.id AND tt.sold_quantity < tt.available_quantity
                ) AS available_tickets
            FROM events e
            JOIN venues v ON e.venue_id = v.id
            WHERE e.status = $1 AND e.event_date >= $2
            ORDER BY e.event_date ASC"#,
        )
            .bind(EVENT_STATUS_PUBLISHED)
            .bind(Utc::now())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_organizer(&self, organizer_id: i64) -> Result<Vec<OrganizerEventRow>, AppError> {
        sqlx::query_as::<_, OrganizerEventRow>(
            r#"SELECT e.*, v.name AS venue_name, v.address, v.city,
                COALESCE((SELECT SUM(bt.quantity)
                          FROM booking_tickets bt
                          JOIN ticket_types tt ON bt.ticket_type_id = tt.id
                          WHERE tt.event_id = e.id), 0)::BIGINT AS tickets_sold,
                e.standard_price * COALESCE((SELECT SUM(bt.quantity)
                          FROM booking_tickets bt
                          JOIN ticket_types tt ON bt.ticket_type_id = tt.id
                          WHERE tt.event_id = e.id), 0)::BIGINT AS revenue
            FROM events e
            LEFT JOIN venues v ON e.venue_id = v.id
            WHERE e.organizer_id = $1
            ORDER BY e.created_at DESC"#,
        )
            .bind(organizer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                title=$1, description=$2, category=$3, event_date=$4,
                standard_price=$5, vip_price=$6, venue_id=$7, status=$8
               WHERE id=$9 RETURNING *"#,
        )
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.category)
            .bind(event.event_date)
            .bind(event.standard_price)
            .bind(event.vip_price)
            .bind(event.venue_id)
            .bind(&event.status)
            .bind(event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            "DELETE FROM booking_tickets WHERE ticket_type_id IN
             (SELECT id FROM ticket_types WHERE event_id = $1)",
        )
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM ticket_types WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
