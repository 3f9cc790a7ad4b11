//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB engine)

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database under `db_dir`
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("hall")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established (SurrealDB embedded, RocksDB)");

        Ok(Self { db })
    }
}
