use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::SmtpConfig,
    error::mail::MailError,
    service::mail::{Mailer, OutboundEmail},
};

/// Port on which the relay expects implicit TLS rather than STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP delivery through lettre's pooled async transport.
pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from configuration.
    ///
    /// Port 465 uses implicit TLS, every other port upgrades with STARTTLS. Credentials are
    /// only attached when a username is configured.
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Transport ready; no connection is opened until the first send
    /// - `Err(MailError::Address)` - `MAIL_FROM` is not a valid mailbox
    /// - `Err(MailError::Smtp)` - TLS parameters for the relay host could not be built
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;

        let builder = if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        }
        .port(config.port);

        let transport = match (&config.username, &config.password) {
            (Some(username), Some(password)) => builder
                .credentials(Credentials::new(username.clone(), password.clone()))
                .build(),
            _ => builder.build(),
        };

        Ok(Self { from, transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let to = parse_mailbox(&email.to)?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone());

        let message = match email.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(email.text, html))?,
            None => builder.header(ContentType::TEXT_PLAIN).body(email.text)?,
        };

        self.transport.send(message).await?;

        tracing::info!(to = %email.to, subject = %email.subject, "Mail sent");

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
