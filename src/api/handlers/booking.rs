use axum::{extract::State, response::IntoResponse, Form};
use crate::api::dtos::{
    requests::CreateBookingRequest,
    responses::{success, BookingCreatedResponse, TicketCounts},
};
use crate::api::handlers::{parse_i64, parse_qty, require};
use crate::domain::models::booking::{NewBooking, TicketOrder};
use crate::domain::models::ticket_type::TicketCategory;
use crate::domain::services::reference::generate_booking_reference;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

const REFERENCE_ATTEMPTS: usize = 5;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event_id_raw = require(payload.event_id, "eventId")?;
    let full_name = require(payload.full_name, "fullName")?;
    let email = require(payload.email, "email")?;
    let phone = require(payload.phone, "phone")?;
    let id_number = require(payload.id_number, "idNumber")?;

    let standard_qty = parse_qty(payload.standard_qty.as_deref(), "standardQty")?;
    let vip_qty = parse_qty(payload.vip_qty.as_deref(), "vipQty")?;

    if standard_qty == 0 && vip_qty == 0 {
        warn!("create_booking: Rejected empty ticket selection from {}", email);
        return Err(AppError::Validation("Please select at least one ticket".into()));
    }

    let event_id = parse_i64(&event_id_raw, "eventId")?;
    info!("create_booking: Starting for event {}", event_id);

    let event = state
        .event_repo
        .find_published(event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found or not available".into()))?;

    let orders: Vec<TicketOrder> = [
        (TicketCategory::Standard, standard_qty),
        (TicketCategory::Vip, vip_qty),
    ]
    .into_iter()
    .filter(|(_, qty)| *qty > 0)
    .map(|(category, quantity)| TicketOrder {
        category,
        quantity,
        unit_price: category.unit_price(&event),
    })
    .collect();

    let total_amount: f64 = orders.iter().map(TicketOrder::subtotal).sum();

    let booking_reference = allocate_reference(&state).await?;

    let booking = state
        .booking_repo
        .create_with_tickets(
            NewBooking {
                event_id: event.id,
                booking_reference,
                full_name,
                email,
                phone,
                id_number,
                total_amount,
                payment_method: payload.payment_method.unwrap_or_else(|| "mpesa".to_string()),
            },
            &orders,
        )
        .await?;

    info!(
        "create_booking: Booking {} created for event {} (total {})",
        booking.booking_reference, event.id, booking.total_amount
    );

    Ok(success(
        "Booking created successfully",
        BookingCreatedResponse {
            booking_reference: booking.booking_reference,
            total_amount: booking.total_amount,
            event_title: event.title,
            tickets: TicketCounts {
                standard: standard_qty,
                vip: vip_qty,
            },
        },
    ))
}

/// Draws fresh references until one is unused. The keyspace is large enough
/// that more than one retry is already suspicious.
async fn allocate_reference(state: &AppState) -> Result<String, AppError> {
    for _ in 0..REFERENCE_ATTEMPTS {
        let candidate = generate_booking_reference();
        if !state.booking_repo.reference_exists(&candidate).await? {
            return Ok(candidate);
        }
        warn!("Booking reference collision on {}", candidate);
    }
    Err(AppError::Conflict(
        "Could not allocate a booking reference".into(),
    ))
}
