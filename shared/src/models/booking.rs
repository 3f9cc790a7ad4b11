//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hall booking as exposed over the API
///
/// Bookings are append-only: created once on a successful form
/// submission and never updated afterwards. `account` is the optional
/// owner; anonymous visitors book without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: i64,
    pub date: NaiveDate,
    pub days: i64,
    #[serde(default)]
    pub food_items: String,
    /// Server-assigned creation time (Unix millis)
    pub created_at: i64,
}
