//! OTP domain models.

use chrono::{DateTime, Utc};

use crate::server::error::otp::OtpError;

/// Delivery channel of a one-time passcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpChannel {
    #[default]
    Email,
    Sms,
}

impl OtpChannel {
    /// Value stored in `otp.channel` and echoed in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpChannel::Email => "email",
            OtpChannel::Sms => "sms",
        }
    }

    /// Parses the request `type` field. Absent means email.
    pub fn parse(value: Option<&str>) -> Result<Self, OtpError> {
        match value.map(str::trim) {
            None | Some("") | Some("email") => Ok(OtpChannel::Email),
            Some("sms") => Ok(OtpChannel::Sms),
            Some(other) => Err(OtpError::UnknownChannel(other.to_string())),
        }
    }
}

/// Issued passcode.
#[derive(Debug, Clone, PartialEq)]
pub struct Otp {
    pub id: i32,
    pub user_id: i32,
    pub code: String,
    pub channel: String,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn from_entity(entity: entity::otp::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            code: entity.code,
            channel: entity.channel,
            expires_at: entity.expires_at,
            is_used: entity.is_used,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a fresh passcode.
#[derive(Debug, Clone)]
pub struct CreateOtpParam {
    pub user_id: i32,
    pub code: String,
    pub channel: OtpChannel,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_defaults_to_email() {
        assert_eq!(OtpChannel::parse(None).unwrap(), OtpChannel::Email);
        assert_eq!(OtpChannel::parse(Some("sms")).unwrap(), OtpChannel::Sms);
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            OtpChannel::parse(Some("pigeon")),
            Err(OtpError::UnknownChannel(t)) if t == "pigeon"
        ));
    }
}
