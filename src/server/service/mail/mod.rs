//! Outbound mail.
//!
//! Services talk to the `Mailer` trait only. `SmtpMailer` delivers through an SMTP relay,
//! `LogMailer` writes messages to the log for local development, and tests substitute a
//! recording implementation to inspect what would have been sent.

pub mod smtp;
pub mod templates;

use async_trait::async_trait;

use crate::server::error::mail::MailError;

/// A single message ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    /// Plain-text body; the whole message for SMS gateway mail.
    pub text: String,
    /// Optional HTML alternative.
    pub html: Option<String>,
}

/// Mail delivery abstraction held in `AppState`.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the transport
    /// - `Err(MailError)` - Message could not be built or delivered
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

/// Mailer that only logs messages.
///
/// Selected with `MAIL_TRANSPORT=log`. Bodies are logged at debug level so OTP codes do not
/// end up in production logs by accident.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Mail not sent (log transport)");
        tracing::debug!(to = %email.to, body = %email.text, "Mail body");

        Ok(())
    }
}
