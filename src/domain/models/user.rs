use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const USER_TYPE_ORGANIZER: &str = "organizer";
pub const USER_TYPE_CUSTOMER: &str = "customer";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    /// None for customers auto-provisioned during booking.
    pub password: Option<String>,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_organizer(&self) -> bool {
        self.user_type == USER_TYPE_ORGANIZER
    }
}

pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub password: Option<String>,
    pub user_type: String,
}
