//! Feedback Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Feedback, FeedbackCreate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "feedback";

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new feedback entry; `submitted_at` is assigned here
    pub async fn create(&self, data: FeedbackCreate) -> RepoResult<Feedback> {
        let row = Feedback {
            id: None,
            name: data.name,
            email: data.email,
            experience: data.experience,
            rating: data.rating,
            image: data.image,
            submitted_at: now_millis(),
        };

        let created: Option<Feedback> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create feedback".to_string()))
    }

    /// All feedback, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Feedback>> {
        let feedback: Vec<Feedback> = self
            .base
            .db()
            .query("SELECT * FROM feedback ORDER BY submitted_at DESC")
            .await?
            .take(0)?;
        Ok(feedback)
    }

    /// Most recent feedback entries
    ///
    /// LIMIT on the embedded engine can drop the first ordered row,
    /// so fetch ordered and slice in memory.
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Feedback>> {
        let mut feedback = self.find_all().await?;
        feedback.truncate(limit);
        Ok(feedback)
    }
}
