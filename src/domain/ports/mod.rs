use crate::domain::models::{
    booking::{Booking, NewBooking, TicketOrder},
    event::{Event, NewEvent, OrganizerEventRow, PublishedEventRow},
    user::{NewUser, User},
    venue::Venue,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_organizer(&self, id: i64) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Resolution order: id match, then name match, then creation.
    /// A venue_id that matches nothing falls through to the name/default path.
    async fn find_or_create(
        &self,
        venue_id: Option<i64>,
        venue_name: Option<&str>,
    ) -> Result<Venue, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Inserts the event and seeds its standard and vip ticket types in one
    /// transaction.
    async fn create(&self, event: NewEvent) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn find_published(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list_published_upcoming(&self) -> Result<Vec<PublishedEventRow>, AppError>;
    async fn list_by_organizer(&self, organizer_id: i64) -> Result<Vec<OrganizerEventRow>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    /// Removes the event's booking_tickets and ticket_types with it. Booking
    /// rows are kept.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// The whole booking lands in one transaction: buyer resolution, the
    /// booking row, one line per ordered category, and the guarded
    /// sold_quantity increments. Any failure rolls everything back.
    async fn create_with_tickets(
        &self,
        booking: NewBooking,
        orders: &[TicketOrder],
    ) -> Result<Booking, AppError>;
    async fn reference_exists(&self, reference: &str) -> Result<bool, AppError>;
}
