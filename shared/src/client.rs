//! Client-related types shared between server and frontend
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Account information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub display_name: String,
}

// =============================================================================
// Booking API DTOs
// =============================================================================

/// Booking form fields, exactly as submitted by the page.
///
/// `guests` and `days` stay raw text here: the client may send
/// descriptive values like "1 Day"; normalization happens server-side.
/// The same struct is echoed back verbatim when validation fails so
/// the form can be redisplayed unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: String,
    pub date: String,
    pub days: String,
    #[serde(default)]
    pub food_items: String,
}

/// Prefill data for the booking form, built from the `cart` query
/// parameter carried over from the menu page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPrefill {
    /// Human-readable one-item-per-line summary for the textarea
    pub food_items: String,
    /// Structured echo of the parsed cart for client-side chips
    pub food_cart: serde_json::Value,
}

/// Booking submission acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSubmitted {
    pub id: String,
}

// =============================================================================
// Feedback API DTOs
// =============================================================================

/// Feedback submission acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmitted {
    pub id: String,
}
