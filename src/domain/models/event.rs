use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const EVENT_STATUS_PUBLISHED: &str = "published";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: i64,
    pub organizer_id: i64,
    pub venue_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub event_date: DateTime<Utc>,
    pub standard_price: f64,
    pub vip_price: f64,
    pub image_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewEvent {
    pub organizer_id: i64,
    pub venue_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub event_date: DateTime<Utc>,
    pub standard_price: f64,
    pub vip_price: f64,
    pub image_url: String,
    pub status: String,
}

/// Public listing row: published upcoming events joined with their venue,
/// plus a count of ticket types that still have stock.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PublishedEventRow {
    pub id: i64,
    pub organizer_id: i64,
    pub venue_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub event_date: DateTime<Utc>,
    pub standard_price: f64,
    pub vip_price: f64,
    pub image_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub venue_name: String,
    pub address: String,
    pub city: String,
    pub available_tickets: i64,
}

/// Organizer dashboard row: every event of one organizer with sales totals.
/// Venue columns come from a LEFT JOIN and may be absent.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct OrganizerEventRow {
    pub id: i64,
    pub organizer_id: i64,
    pub venue_id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub event_date: DateTime<Utc>,
    pub standard_price: f64,
    pub vip_price: f64,
    pub image_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub tickets_sold: i64,
    pub revenue: f64,
}
