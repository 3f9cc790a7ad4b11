//! Data models
//!
//! Shared between hall-server and frontend (via API).
//! Timestamps are Unix millis (`i64`), booking dates are `YYYY-MM-DD`.

pub mod booking;
pub mod feedback;

// Re-exports
pub use booking::*;
pub use feedback::*;
