//! Authentication Handlers
//!
//! Handles admin login, logout, and the current-account endpoint

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::AccountRepository;
use crate::security_log;
use crate::utils::AppError;
use crate::auth::CurrentUser;

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates account credentials and returns a JWT token.
/// Unknown user and wrong password share the same message and the
/// same fixed delay, so neither can be told apart from outside.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = AccountRepository::new(state.get_db());
    let username = req.username.clone();

    let account = repo
        .find_by_username(&username)
        .await
        .map_err(|e| AppError::database(format!("Query failed: {}", e)))?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent username enumeration
    let account = match account {
        Some(a) => {
            // Verify password first so a disabled account is only
            // revealed to someone holding valid credentials
            let password_valid = a
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", username = username.as_str());
                tracing::warn!(username = %username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            if !a.is_active {
                return Err(AppError::forbidden("Account has been disabled".to_string()));
            }

            a
        }
        None => {
            security_log!("WARN", "login_failed", username = username.as_str());
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    // Generate JWT token
    let jwt_service = state.get_jwt_service();
    let user_id = account
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();

    let token = jwt_service
        .generate_token(&user_id, &account.username, &account.display_name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = %user_id,
        username = %account.username,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: account.into(),
    };

    Ok(Json(response))
}

/// Get current account info
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    // Query fresh account data; fall back to the token claims if the
    // row has vanished since the token was issued
    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .find_by_username(&user.username)
        .await
        .map_err(|e| AppError::database(format!("Failed to query account: {}", e)))?;

    let user_info = match account {
        Some(a) => a.into(),
        None => UserInfo {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
        },
    };

    Ok(Json(user_info))
}

/// Logout handler
pub async fn logout(Extension(user): Extension<CurrentUser>) -> Result<Json<()>, AppError> {
    security_log!("INFO", "logout", username = user.username.as_str());
    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        "User logged out"
    );

    Ok(Json(()))
}
