//! Shared types for the hall booking system
//!
//! Common types used across the server and its frontends:
//! wire models and API request/response DTOs.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
