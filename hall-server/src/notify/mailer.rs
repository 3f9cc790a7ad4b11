//! SMTP notifier implementation using Lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use shared::models::Booking;

use crate::core::SmtpConfig;
use crate::notify::{BookingNotifier, NOTIFY_SUBJECT, NotifyError, render_booking_email};

/// SMTP notifier: mails the operator about each new booking
#[derive(Clone)]
pub struct SmtpNotifier {
    config: SmtpConfig,
    /// Operator address the summaries go to
    to_email: String,
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig, to_email: String) -> Self {
        Self { config, to_email }
    }

    /// Build an SMTP transport for sending.
    ///
    /// A fresh transport per email avoids connection pooling issues.
    fn build_transport(&self) -> Result<SmtpTransport, NotifyError> {
        let credentials =
            Credentials::new(self.config.username.clone(), self.config.password.clone());

        Ok(SmtpTransport::relay(&self.config.host)
            .map_err(|e| NotifyError::Transport(format!("SMTP relay error: {e}")))?
            .port(self.config.port)
            .credentials(credentials)
            .build())
    }

    /// Build the "From" header
    fn from_header(&self) -> String {
        format!("{} <{}>", self.config.from_name, self.config.from_email)
    }
}

#[async_trait]
impl BookingNotifier for SmtpNotifier {
    async fn booking_created(&self, booking: &Booking) -> Result<(), NotifyError> {
        let body = render_booking_email(booking);

        let email = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| NotifyError::Message(format!("Invalid from address: {e}")))?,
            )
            .to(self
                .to_email
                .parse()
                .map_err(|e| NotifyError::Message(format!("Invalid to address: {e}")))?)
            .subject(NOTIFY_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Message(format!("Failed to build email: {e}")))?;

        let mailer = self.build_transport()?;

        // lettre's SmtpTransport is blocking; keep it off the runtime
        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map(|_| ())
                .map_err(|e| NotifyError::Transport(format!("Failed to send email: {e}")))
        })
        .await
        .map_err(|e| NotifyError::Task(e.to_string()))?
    }
}
