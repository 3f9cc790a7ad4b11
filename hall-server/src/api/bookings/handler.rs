//! Booking Record Handlers (admin)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// GET /api/bookings - 全部预订，新到旧
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<shared::models::Booking>>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(ok(bookings.into_iter().map(Into::into).collect()))
}

/// GET /api/bookings/:id - 单条预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<shared::models::Booking>>> {
    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Booking {} not found", id)))?;

    Ok(ok(booking.into()))
}
