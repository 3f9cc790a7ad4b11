//! JWT Extractors
//!
//! Custom extractors for validating JWT tokens in handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// JWT Auth Extractor
///
/// Use this extractor in protected handlers to automatically validate JWT
/// and extract CurrentUser
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::unauthorized());
            }
        };

        // Validate token
        let jwt_service = state.get_jwt_service();
        match jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);

                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );

                match e {
                    crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                    _ => Err(AppError::invalid_token("Invalid token")),
                }
            }
        }
    }
}

/// Optional-login extractor for visitor endpoints
///
/// The booking form is public, but a logged-in admin submitting it has
/// the booking linked to their account. A missing, malformed or expired
/// token is simply treated as "not logged in"; this extractor never
/// rejects the request.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl FromRequestParts<ServerState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(MaybeUser(Some(user.clone())));
        }

        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(JwtService::extract_from_header);

        let Some(token) = token else {
            return Ok(MaybeUser(None));
        };

        match state.get_jwt_service().validate_token(token) {
            Ok(claims) => Ok(MaybeUser(Some(CurrentUser::from(claims)))),
            Err(_) => Ok(MaybeUser(None)),
        }
    }
}
