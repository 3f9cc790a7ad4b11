//! Account Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Account;
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "account";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create a new account from an already-hashed password
    pub async fn create(
        &self,
        username: &str,
        display_name: &str,
        hash_pass: &str,
    ) -> RepoResult<Account> {
        if self.find_by_username(username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                username
            )));
        }

        let account = Account {
            id: None,
            username: username.to_string(),
            display_name: display_name.to_string(),
            hash_pass: hash_pass.to_string(),
            is_active: true,
            created_at: now_millis(),
        };

        let created: Option<Account> = self.base.db().create(TABLE).content(account).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Number of accounts (used by first-run admin seeding)
    pub async fn count(&self) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS count FROM account GROUP ALL")
            .await?;
        let row: Option<serde_json::Value> = result.take(0)?;
        Ok(row
            .and_then(|v| v.get("count").and_then(|c| c.as_u64()))
            .unwrap_or(0))
    }
}
