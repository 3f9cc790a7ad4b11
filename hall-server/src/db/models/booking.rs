//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Booking ID type
pub type BookingId = RecordId;

/// Hall booking row matching the SurrealDB table
///
/// Rows are append-only: created on a successful form submission,
/// never updated or deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    /// Optional owner: the account that was logged in at submission time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<RecordId>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: i64,
    pub date: NaiveDate,
    pub days: i64,
    #[serde(default)]
    pub food_items: String,
    /// Server-assigned, immutable after creation (Unix millis)
    pub created_at: i64,
}

/// Booking for creation (normalized values only)
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub account: Option<RecordId>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: i64,
    pub date: NaiveDate,
    pub days: i64,
    pub food_items: String,
}

impl From<Booking> for shared::models::Booking {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.map(|t| t.to_string()).unwrap_or_default(),
            account: b.account.map(|a| a.to_string()),
            name: b.name,
            phone: b.phone,
            email: b.email,
            guests: b.guests,
            date: b.date,
            days: b.days,
            food_items: b.food_items,
            created_at: b.created_at,
        }
    }
}
