use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::models::event::Event;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TicketType {
    pub id: i64,
    pub event_id: i64,
    pub type_name: String,
    pub price: f64,
    pub available_quantity: i64,
    pub sold_quantity: i64,
}

/// The two categories every event sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketCategory {
    Standard,
    Vip,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 2] = [TicketCategory::Standard, TicketCategory::Vip];

    pub fn type_name(&self) -> &'static str {
        match self {
            TicketCategory::Standard => "standard",
            TicketCategory::Vip => "vip",
        }
    }

    /// Inventory seeded when the category's row is first created for an event.
    pub fn default_available(&self) -> i64 {
        match self {
            TicketCategory::Standard => 1000,
            TicketCategory::Vip => 100,
        }
    }

    pub fn unit_price(&self, event: &Event) -> f64 {
        match self {
            TicketCategory::Standard => event.standard_price,
            TicketCategory::Vip => event.vip_price,
        }
    }
}
