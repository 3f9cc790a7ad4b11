//! Account Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Account ID type
pub type AccountId = RecordId;

/// Admin account row matching the SurrealDB table
///
/// `hash_pass` is an argon2 PHC string. The row never leaves the server;
/// API responses convert to [`shared::client::UserInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    pub username: String,
    pub display_name: String,
    pub hash_pass: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

impl Account {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

impl From<Account> for shared::client::UserInfo {
    fn from(a: Account) -> Self {
        Self {
            id: a.id.map(|t| t.to_string()).unwrap_or_default(),
            username: a.username,
            display_name: a.display_name,
        }
    }
}
