use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::ticket_type::TicketCategory;

pub const PAYMENT_STATUS_PENDING: &str = "pending";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub booking_reference: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub total_amount: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookingTicket {
    pub id: i64,
    pub booking_id: i64,
    pub ticket_type_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

pub struct NewBooking {
    pub event_id: i64,
    pub booking_reference: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub total_amount: f64,
    pub payment_method: String,
}

/// One category's share of a booking request.
#[derive(Debug, Clone, Copy)]
pub struct TicketOrder {
    pub category: TicketCategory,
    pub quantity: i64,
    pub unit_price: f64,
}

impl TicketOrder {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
