//! Booking API Handlers
//!
//! GET 带着菜单页的 cart 参数换取表单预填；
//! POST 归一化、落库并 best-effort 通知运营。

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    Form, Json,
    extract::{Query, State},
};
use serde::Deserialize;
use surrealdb::RecordId;

use shared::client::{BookingPrefill, BookingRequest, BookingSubmitted};

use crate::auth::MaybeUser;
use crate::cart::decode_cart;
use crate::core::ServerState;
use crate::db::models::BookingCreate;
use crate::db::repository::BookingRepository;
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok_with_message, parse_int_loose};

/// Validation message shown when guests/days cannot be normalized
const INVALID_NUMBERS_MSG: &str = "Please provide valid numeric values for guests and days.";

#[derive(Debug, Deserialize)]
pub struct PrefillQuery {
    pub cart: Option<String>,
}

/// GET /api/book_hall - 预订表单预填
///
/// 菜单页 "Proceed to Book" 通过 `?cart=...` 传入已选菜品。
/// 缺省或空参数意味着没有预填。
pub async fn prefill(Query(query): Query<PrefillQuery>) -> Json<AppResponse<BookingPrefill>> {
    let prefill = match query.cart.as_deref() {
        Some(cart) if !cart.is_empty() => decode_cart(cart),
        _ => BookingPrefill {
            food_items: String::new(),
            food_cart: serde_json::Value::Array(Vec::new()),
        },
    };
    crate::utils::ok(prefill)
}

/// POST /api/book_hall - 提交预订
///
/// guests/days 归一化失败时整张表单原样回显 (HTTP 400)，
/// 什么都不落库；成功后通知失败只记日志。
pub async fn submit(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<BookingRequest>,
) -> AppResult<Response> {
    // Parse numeric values safely (frontend may send strings like "1 Day").
    // The persistence invariant is guests/days >= 0, so bare negatives
    // from a direct parse are rejected the same way.
    let guests_value = parse_int_loose(&form.guests).filter(|g| *g >= 0);
    let days_value = parse_int_loose(&form.days).filter(|d| *d >= 0);

    let (Some(guests), Some(days)) = (guests_value, days_value) else {
        // 回显提交的原始值，表单可以原样重绘让用户改正
        let body = AppResponse {
            code: "E0002".to_string(),
            message: INVALID_NUMBERS_MSG.to_string(),
            data: Some(form),
        };
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    };

    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.phone, "phone", MAX_PHONE_LEN)?;
    validate_required_text(&form.email, "email", MAX_EMAIL_LEN)?;

    let food_items = form.food_items.trim().to_string();
    if food_items.len() > MAX_TEXT_LEN {
        return Err(AppError::validation(format!(
            "food_items is too long ({} chars, max {MAX_TEXT_LEN})",
            food_items.len()
        )));
    }

    let date = parse_date(&form.date)?;

    // 登录状态下提交的预订挂到该账号名下
    let account: Option<RecordId> = user.and_then(|u| u.id.parse().ok());

    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .create(BookingCreate {
            account,
            name: form.name,
            phone: form.phone,
            email: form.email,
            guests,
            date,
            days,
            food_items,
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let booking: shared::models::Booking = booking.into();

    // Send email notification, best-effort and timeout-bound. The row
    // is already committed; a dead SMTP server must not undo that nor
    // leak an error to the submitter.
    let notify_timeout = Duration::from_millis(state.config.notify_timeout_ms);
    match tokio::time::timeout(notify_timeout, state.notifier.booking_created(&booking)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::warn!(booking_id = %booking.id, error = %e, "Booking notification failed");
        }
        Err(_) => {
            tracing::warn!(booking_id = %booking.id, "Booking notification timed out");
        }
    }

    tracing::info!(
        booking_id = %booking.id,
        guests = booking.guests,
        days = booking.days,
        date = %booking.date,
        "Booking submitted successfully"
    );

    Ok(ok_with_message(
        BookingSubmitted { id: booking.id },
        "Booking submitted successfully!",
    )
    .into_response())
}
