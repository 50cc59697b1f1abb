use axum::{extract::State, response::IntoResponse, Form};
use crate::api::dtos::{
    requests::{LoginMerchantRequest, RegisterMerchantRequest},
    responses::{success, LoginResponse, MerchantRegisteredResponse},
};
use crate::api::handlers::{require, require_text};
use crate::domain::models::user::{NewUser, USER_TYPE_ORGANIZER};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn register_merchant(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<RegisterMerchantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let full_name = require_text(payload.full_name, "fullName")?;
    let email = require_text(payload.email, "email")?;
    let phone = require_text(payload.phone, "phone")?;
    let id_number = require_text(payload.id_number, "idNumber")?;
    let password = require_text(payload.password, "password")?;
    let company_name = require_text(payload.company_name, "companyName")?;

    info!("Registering merchant account for {}", email);

    if state.user_repo.find_by_email(&email).await?.is_some() {
        warn!("Registration rejected, email already taken: {}", email);
        return Err(AppError::Validation("Email already registered".into()));
    }

    let user = state
        .user_repo
        .create(NewUser {
            full_name,
            email,
            phone,
            id_number,
            password: Some(password),
            user_type: USER_TYPE_ORGANIZER.to_string(),
        })
        .await?;

    info!("Merchant registered: {} ({})", user.id, user.email);

    Ok(success(
        "Merchant registered successfully",
        MerchantRegisteredResponse {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            company_name,
            user_type: user.user_type,
        },
    ))
}

pub async fn login_merchant(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<LoginMerchantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = require(payload.email, "email")?;
    let password = require(payload.password, "password")?;

    let user = state
        .user_repo
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Customers carry no password and can never log in here.
    if !user.is_organizer() || user.password.as_deref() != Some(password.as_str()) {
        warn!("Failed login attempt for {}", email);
        return Err(AppError::Unauthorized);
    }

    info!("Merchant logged in: {} ({})", user.id, user.email);

    Ok(success(
        "Login successful",
        LoginResponse {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            user_type: user.user_type,
        },
    ))
}
