//! 预订通知
//!
//! 新预订入库后给运营邮箱发一封纯文本摘要邮件。发送是 best-effort：
//! 失败只记日志，绝不影响已落库的预订，也不影响提交人看到的结果。
//!
//! [`BookingNotifier`] 是注入点，测试用它替换 SMTP 实现。

pub mod mailer;

pub use mailer::SmtpNotifier;

use async_trait::async_trait;
use thiserror::Error;

use shared::models::Booking;

use crate::utils::time::format_millis;

/// 通知邮件主题
pub const NOTIFY_SUBJECT: &str = "New Hall Booking Request";

/// 通知错误
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("SMTP transport error: {0}")]
    Transport(String),

    #[error("Failed to build email: {0}")]
    Message(String),

    #[error("Notification task failed: {0}")]
    Task(String),
}

/// Outbound notification seam
///
/// The server holds an `Arc<dyn BookingNotifier>`; production wires in
/// [`SmtpNotifier`], tests swap in their own implementations.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    /// Notify the operator about a freshly persisted booking
    async fn booking_created(&self, booking: &Booking) -> Result<(), NotifyError>;
}

/// Disabled notifications (SMTP not configured)
pub struct NoopNotifier;

#[async_trait]
impl BookingNotifier for NoopNotifier {
    async fn booking_created(&self, booking: &Booking) -> Result<(), NotifyError> {
        tracing::debug!(booking_id = %booking.id, "Notification skipped (no SMTP configured)");
        Ok(())
    }
}

/// Plain-text body of the operator notification
pub fn render_booking_email(booking: &Booking) -> String {
    let food_items_display = if booking.food_items.is_empty() {
        "None"
    } else {
        booking.food_items.as_str()
    };

    format!(
        r#"
New Booking Received:

Booking ID: {id}
Name: {name}
Phone: {phone}
Email: {email}
Number of Guests: {guests}
Booking Date: {date}
Duration: {days} day(s)
Selected Food Items:
{food_items}
Submitted at: {submitted_at}
"#,
        id = booking.id,
        name = booking.name,
        phone = booking.phone,
        email = booking.email,
        guests = booking.guests,
        date = booking.date,
        days = booking.days,
        food_items = food_items_display,
        submitted_at = format_millis(booking.created_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: "booking:xyz".to_string(),
            account: None,
            name: "Aditi".to_string(),
            phone: "9876543210".to_string(),
            email: "aditi@example.com".to_string(),
            guests: 150,
            date: NaiveDate::from_ymd_opt(2026, 11, 21).unwrap(),
            days: 2,
            food_items: "Paneer Tikka\nBiryani".to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn body_carries_normalized_values() {
        let body = render_booking_email(&booking());
        assert!(body.contains("Booking ID: booking:xyz"));
        assert!(body.contains("Number of Guests: 150"));
        assert!(body.contains("Duration: 2 day(s)"));
        assert!(body.contains("Booking Date: 2026-11-21"));
        assert!(body.contains("Paneer Tikka\nBiryani"));
        assert!(body.contains("Submitted at: 1970-01-01 00:00:00"));
    }

    #[test]
    fn empty_food_items_render_as_none() {
        let mut b = booking();
        b.food_items.clear();
        assert!(render_booking_email(&b).contains("Selected Food Items:\nNone"));
    }
}
