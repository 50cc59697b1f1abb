pub mod booking;
pub mod event;
pub mod ticket_type;
pub mod user;
pub mod venue;
