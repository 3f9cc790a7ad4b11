//! Feedback Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Feedback ID type
pub type FeedbackId = RecordId;

/// Visitor feedback row matching the SurrealDB table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FeedbackId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub experience: String,
    /// 1-5 stars, defaulted to 5 when the form value is unrecognized
    pub rating: u8,
    /// Stored image filename under work_dir/uploads/feedback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Server-assigned, immutable after creation (Unix millis)
    pub submitted_at: i64,
}

/// Feedback for creation
#[derive(Debug, Clone)]
pub struct FeedbackCreate {
    pub name: String,
    pub email: Option<String>,
    pub experience: String,
    pub rating: u8,
    pub image: Option<String>,
}

impl From<Feedback> for shared::models::Feedback {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id.map(|t| t.to_string()).unwrap_or_default(),
            name: f.name,
            email: f.email,
            experience: f.experience,
            rating: f.rating,
            image: f.image,
            submitted_at: f.submitted_at,
        }
    }
}
