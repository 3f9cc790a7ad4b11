//! Database row models
//!
//! Row types matching the SurrealDB tables. API responses use the wire
//! models from the `shared` crate; each row type converts via `From`.

pub mod account;
pub mod booking;
pub mod feedback;

// Re-exports
pub use account::{Account, AccountId};
pub use booking::{Booking, BookingCreate, BookingId};
pub use feedback::{Feedback, FeedbackCreate, FeedbackId};
