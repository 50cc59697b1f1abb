use crate::domain::{
    models::booking::{Booking, NewBooking, TicketOrder, PAYMENT_STATUS_PENDING},
    models::user::USER_TYPE_CUSTOMER,
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_with_tickets(
        &self,
        booking: NewBooking,
        orders: &[TicketOrder],
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(&booking.email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let user_id = match existing {
            Some(id) => id,
            None => sqlx::query_scalar::<_, i64>(
                "INSERT INTO users (full_name, email, phone, id_number, password, user_type, created_at)
                 VALUES (?, ?, ?, ?, NULL, ?, ?)
                 RETURNING id",
            )
                .bind(&booking.full_name)
                .bind(&booking.email)
                .bind(&booking.phone)
                .bind(&booking.id_number)
                .bind(USER_TYPE_CUSTOMER)
                .bind(Utc::now())
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::Database)?,
        };

        let created = sqlx::query_as::<_, Booking>(
            r#"INSERT INTO bookings (
                user_id, event_id, booking_reference, full_name, email, phone,
                id_number, total_amount, payment_method, payment_status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(user_id)
            .bind(booking.event_id)
            .bind(&booking.booking_reference)
            .bind(&booking.full_name)
            .bind(&booking.email)
            .bind(&booking.phone)
            .bind(&booking.id_number)
            .bind(booking.total_amount)
            .bind(&booking.payment_method)
            .bind(PAYMENT_STATUS_PENDING)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for order in orders {
            let found: Option<i64> = sqlx::query_scalar(
                "SELECT id FROM ticket_types WHERE event_id = ? AND type_name = ?",
            )
                .bind(booking.event_id)
                .bind(order.category.type_name())
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            // Older events may predate ticket type seeding.
            let ticket_type_id = match found {
                Some(id) => id,
                None => sqlx::query_scalar::<_, i64>(
                    "INSERT INTO ticket_types (event_id, type_name, price, available_quantity, sold_quantity)
                     VALUES (?, ?, ?, ?, 0)
                     RETURNING id",
                )
                    .bind(booking.event_id)
                    .bind(order.category.type_name())
                    .bind(order.unit_price)
                    .bind(order.category.default_available())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::Database)?,
            };

            sqlx::query(
                "INSERT INTO booking_tickets (booking_id, ticket_type_id, quantity, unit_price, subtotal)
                 VALUES (?, ?, ?, ?, ?)",
            )
                .bind(created.id)
                .bind(ticket_type_id)
                .bind(order.quantity)
                .bind(order.unit_price)
                .bind(order.subtotal())
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            let result = sqlx::query(
                "UPDATE ticket_types SET sold_quantity = sold_quantity + ?
                 WHERE id = ? AND sold_quantity + ? <= available_quantity",
            )
                .bind(order.quantity)
                .bind(ticket_type_id)
                .bind(order.quantity)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                return Err(AppError::Conflict(format!(
                    "Not enough {} tickets available",
                    order.category.type_name()
                )));
            }
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn reference_exists(&self, reference: &str) -> Result<bool, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE booking_reference = ?")
                .bind(reference)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;
        Ok(count > 0)
    }
}
