use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Form,
};
use crate::api::dtos::{
    requests::{CreateEventRequest, DeleteEventRequest, MerchantEventsQuery, UpdateEventRequest},
    responses::{
        success, success_data, EventCreatedResponse, EventDeletedResponse, EventUpdatedResponse,
        MerchantEventResponse, PublicEventResponse,
    },
};
use crate::api::handlers::{parse_f64, parse_i64, require};
use crate::domain::models::event::{NewEvent, EVENT_STATUS_PUBLISHED};
use crate::domain::services::format::parse_event_date;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Public storefront listing: published events that have not happened yet.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.event_repo.list_published_upcoming().await?;
    let events: Vec<PublicEventResponse> = rows.into_iter().map(Into::into).collect();
    Ok(success_data(events))
}

/// Dashboard listing: every event a merchant owns, any status, with sales totals.
pub async fn list_merchant_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MerchantEventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let merchant_id = match query.merchant_id.as_deref() {
        Some(raw) if !raw.is_empty() => parse_i64(raw, "merchantId")?,
        _ => return Err(AppError::Validation("Missing merchantId parameter".into())),
    };

    let rows = state.event_repo.list_by_organizer(merchant_id).await?;
    let events: Vec<MerchantEventResponse> = rows.into_iter().map(Into::into).collect();
    Ok(success_data(events))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let organizer_raw = require(payload.organizer_id, "organizerId")?;
    let title = require(payload.title, "title")?;
    let description = require(payload.description, "description")?;
    let category = require(payload.category, "category")?;
    let event_date_raw = require(payload.event_date, "eventDate")?;
    let standard_price_raw = require(payload.standard_price, "standardPrice")?;
    let vip_price_raw = require(payload.vip_price, "vipPrice")?;

    let organizer_id = parse_i64(&organizer_raw, "organizerId")?;
    let standard_price = parse_f64(&standard_price_raw, "standardPrice")?;
    let vip_price = parse_f64(&vip_price_raw, "vipPrice")?;
    let event_date = parse_event_date(&event_date_raw)
        .ok_or_else(|| AppError::Validation("Invalid value for field: eventDate".into()))?;

    info!("Creating event '{}' for organizer {}", title, organizer_id);

    state
        .user_repo
        .find_organizer(organizer_id)
        .await?
        .ok_or(AppError::NotFound("Organizer not found".into()))?;

    // A non-numeric venueId falls through to the lookup-by-name path.
    let venue_id = payload
        .venue_id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok());
    let venue = state
        .venue_repo
        .find_or_create(venue_id, payload.venue_name.as_deref())
        .await?;

    let created = state
        .event_repo
        .create(NewEvent {
            organizer_id,
            venue_id: venue.id,
            title,
            description,
            category,
            event_date,
            standard_price,
            vip_price,
            image_url: payload.image_url.unwrap_or_default(),
            status: EVENT_STATUS_PUBLISHED.to_string(),
        })
        .await?;

    info!("Event created: {} '{}'", created.id, created.title);

    Ok(success(
        "Event created successfully",
        EventCreatedResponse {
            event_id: created.id,
            title: created.title,
            event_date: created.event_date,
        },
    ))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event_id_raw = require(payload.event_id, "eventId")?;
    let title = require(payload.title, "title")?;
    let description = require(payload.description, "description")?;
    let category = require(payload.category, "category")?;
    let event_date_raw = require(payload.event_date, "eventDate")?;
    let standard_price_raw = require(payload.standard_price, "standardPrice")?;
    let vip_price_raw = require(payload.vip_price, "vipPrice")?;

    let event_id = parse_i64(&event_id_raw, "eventId")?;
    let standard_price = parse_f64(&standard_price_raw, "standardPrice")?;
    let vip_price = parse_f64(&vip_price_raw, "vipPrice")?;
    let event_date = parse_event_date(&event_date_raw)
        .ok_or_else(|| AppError::Validation("Invalid value for field: eventDate".into()))?;

    let mut event = state
        .event_repo
        .find_by_id(event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Venue changes go by name only; a blank name keeps the current venue.
    if let Some(venue_name) = payload.venue_name.as_deref().filter(|name| !name.is_empty()) {
        let venue = state.venue_repo.find_or_create(None, Some(venue_name)).await?;
        event.venue_id = venue.id;
    }

    event.title = title;
    event.description = description;
    event.category = category;
    event.event_date = event_date;
    event.standard_price = standard_price;
    event.vip_price = vip_price;
    event.status = payload
        .status
        .unwrap_or_else(|| EVENT_STATUS_PUBLISHED.to_string());

    let updated = state.event_repo.update(&event).await?;
    info!("Event updated: {}", updated.id);

    Ok(success(
        "Event updated successfully",
        EventUpdatedResponse {
            event_id: updated.id,
            title: updated.title,
            status: updated.status,
        },
    ))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<DeleteEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event_id_raw = payload
        .event_id
        .ok_or_else(|| AppError::Validation("Missing eventId parameter".into()))?;
    let event_id = parse_i64(&event_id_raw, "eventId")?;

    let event = state
        .event_repo
        .find_by_id(event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    state.event_repo.delete(event.id).await?;
    info!("Event deleted: {} '{}'", event.id, event.title);

    Ok(success(
        "Event deleted successfully",
        EventDeletedResponse {
            event_id: event.id,
            title: event.title,
        },
    ))
}
