//! Booking Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Booking, BookingCreate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new booking; `created_at` is assigned here
    pub async fn create(&self, data: BookingCreate) -> RepoResult<Booking> {
        let row = Booking {
            id: None,
            account: data.account,
            name: data.name,
            phone: data.phone,
            email: data.email,
            guests: data.guests,
            date: data.date,
            days: data.days,
            food_items: data.food_items,
            created_at: now_millis(),
        };

        let created: Option<Booking> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// All bookings, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .base
            .db()
            .query("SELECT * FROM booking ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(bookings)
    }

    /// Find booking by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Booking>> {
        let pure_id = id.strip_prefix("booking:").unwrap_or(id);
        let booking: Option<Booking> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(booking)
    }
}
