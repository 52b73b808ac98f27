//! SMS delivery through carrier email-to-SMS gateways.
//!
//! A text message is sent as a plain-text email to `{digits}@{gateway}` where the gateway is
//! looked up from the subscriber's carrier.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::{
    error::{otp::OtpError, AppError},
    service::mail::{Mailer, OutboundEmail},
};

/// Longest body a carrier gateway delivers as one message.
pub const SMS_MAX_LENGTH: usize = 160;

/// Carrier key → gateway domain.
const CARRIER_GATEWAYS: &[(&str, &str)] = &[
    ("att", "txt.att.net"),
    ("verizon", "vtext.com"),
    ("tmobile", "tmomail.net"),
    ("sprint", "messaging.sprintpcs.com"),
    ("uscellular", "email.uscc.net"),
    ("virgin", "vmobl.com"),
    ("boost", "sms.myboostmobile.com"),
    ("cricket", "sms.cricketwireless.net"),
    ("metropcs", "mymetropcs.com"),
    ("googlefi", "msg.fi.google.com"),
    ("mint", "mailmymobile.net"),
];

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{9,14}$").expect("valid phone regex"));

/// Looks up the gateway domain for a carrier key.
pub fn carrier_gateway(carrier: &str) -> Option<&'static str> {
    CARRIER_GATEWAYS
        .iter()
        .find(|(key, _)| *key == carrier)
        .map(|(_, domain)| *domain)
}

/// Builds the gateway address for a phone number.
///
/// # Returns
/// - `Ok(String)` - `{digits}@{gateway}` with any leading `+` removed
/// - `Err(OtpError::UnsupportedCarrier)` - Carrier is not in the gateway table
/// - `Err(OtpError::InvalidPhone)` - Phone is not 10 to 15 digits with an optional `+`
pub fn gateway_address(phone: &str, carrier: &str) -> Result<String, OtpError> {
    let Some(domain) = carrier_gateway(carrier) else {
        return Err(OtpError::UnsupportedCarrier(carrier.to_string()));
    };

    if !PHONE_REGEX.is_match(phone) {
        return Err(OtpError::InvalidPhone);
    }

    Ok(format!("{}@{}", phone.trim_start_matches('+'), domain))
}

pub struct SmsService<'a> {
    mailer: &'a dyn Mailer,
}

impl<'a> SmsService<'a> {
    pub fn new(mailer: &'a dyn Mailer) -> Self {
        Self { mailer }
    }

    /// Sends a text message through the carrier's gateway.
    ///
    /// Messages longer than `SMS_MAX_LENGTH` characters are truncated with a warning.
    ///
    /// # Returns
    /// - `Ok(())` - Gateway mail accepted by the transport
    /// - `Err(AppError::OtpErr)` - Unknown carrier or malformed phone
    /// - `Err(AppError::MailErr)` - Delivery failed
    pub async fn send(&self, phone: &str, carrier: &str, message: &str) -> Result<(), AppError> {
        let to = gateway_address(phone, carrier)?;

        if message.chars().count() > SMS_MAX_LENGTH {
            tracing::warn!(
                carrier = carrier,
                length = message.chars().count(),
                "SMS message exceeds {} characters and will be truncated",
                SMS_MAX_LENGTH
            );
        }
        let text: String = message.chars().take(SMS_MAX_LENGTH).collect();

        self.mailer
            .send(OutboundEmail {
                to,
                subject: String::new(),
                text,
                html: None,
            })
            .await?;

        tracing::info!(carrier = carrier, "SMS sent through carrier gateway");

        Ok(())
    }
}
