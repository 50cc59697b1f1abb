use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::event::{OrganizerEventRow, PublishedEventRow};
use crate::domain::services::format::{format_event_date, format_price};

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

pub fn success<T>(message: impl Into<String>, data: T) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        message: Some(message.into()),
        data,
    };
    (StatusCode::OK, Json(body))
}

/// Listing endpoints answer with data only, no message key.
pub fn success_data<T>(data: T) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse { success: true, message: None, data };
    (StatusCode::OK, Json(body))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub event_id: i64,
    pub title: String,
    pub event_date: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdatedResponse {
    pub event_id: i64,
    pub title: String,
    pub status: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDeletedResponse {
    pub event_id: i64,
    pub title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantRegisteredResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub user_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub user_type: String,
}

#[derive(Serialize)]
pub struct TicketCounts {
    pub standard: i64,
    pub vip: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking_reference: String,
    pub total_amount: f64,
    pub event_title: String,
    pub tickets: TicketCounts,
}

/// Public listing entry. Field names stay in row shape; the dashboard and
/// booking pages read them as-is.
#[derive(Serialize)]
pub struct PublicEventResponse {
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
    pub standard_price_formatted: String,
    pub vip_price_formatted: String,
    pub event_date_formatted: String,
}

impl From<PublishedEventRow> for PublicEventResponse {
    fn from(row: PublishedEventRow) -> Self {
        Self {
            standard_price_formatted: format_price(row.standard_price),
            vip_price_formatted: format_price(row.vip_price),
            event_date_formatted: format_event_date(&row.event_date),
            id: row.id,
            organizer_id: row.organizer_id,
            venue_id: row.venue_id,
            title: row.title,
            description: row.description,
            category: row.category,
            event_date: row.event_date,
            standard_price: row.standard_price,
            vip_price: row.vip_price,
            image_url: row.image_url,
            status: row.status,
            created_at: row.created_at,
            venue_name: row.venue_name,
            address: row.address,
            city: row.city,
            available_tickets: row.available_tickets,
        }
    }
}

#[derive(Serialize)]
pub struct MerchantEventResponse {
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
    pub views: i64,
}

impl From<OrganizerEventRow> for MerchantEventResponse {
    fn from(row: OrganizerEventRow) -> Self {
        Self {
            id: row.id,
            organizer_id: row.organizer_id,
            venue_id: row.venue_id,
            title: row.title,
            description: row.description,
            category: row.category,
            event_date: row.event_date,
            standard_price: row.standard_price,
            vip_price: row.vip_price,
            image_url: row.image_url,
            status: row.status,
            created_at: row.created_at,
            venue_name: row.venue_name,
            address: row.address,
            city: row.city,
            tickets_sold: row.tickets_sold,
            revenue: row.revenue,
            // View tracking never shipped; the dashboard still expects the key.
            views: 0,
        }
    }
}
