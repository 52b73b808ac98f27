use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum OtpError {
    /// An unused code for the same channel was issued less than a minute ago.
    #[error("Please wait {0} seconds before requesting another OTP")]
    Cooldown(i64),

    /// Email verification requested for an already verified account.
    #[error("Email is already verified")]
    AlreadyVerified,

    /// SMS requested for an account without phone or carrier.
    #[error("Phone number and carrier not registered")]
    PhoneNotRegistered,

    #[error("Unsupported carrier: {0}")]
    UnsupportedCarrier(String),

    #[error("Invalid phone number format")]
    InvalidPhone,

    /// Channel other than `email` or `sms`.
    #[error("Invalid OTP type: {0}")]
    UnknownChannel(String),

    /// Submitted code is not six digits.
    #[error("Valid 6-digit OTP is required")]
    InvalidFormat,

    #[error("Invalid or expired OTP")]
    InvalidOrExpired,

    /// Too many failed verifications inside the lockout window.
    #[error("Too many failed attempts. Please try again later.")]
    TooManyAttempts,

    /// No unverified account matched the unauthenticated request.
    #[error("User not found or already verified")]
    UserNotFoundOrVerified,
}

impl OtpError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Cooldown(_) | Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::UserNotFoundOrVerified => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for OtpError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDto::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_errors_are_429() {
        assert_eq!(OtpError::Cooldown(12).status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(OtpError::TooManyAttempts.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn cooldown_message_names_remaining_seconds() {
        assert_eq!(
            OtpError::Cooldown(42).to_string(),
            "Please wait 42 seconds before requesting another OTP"
        );
    }

    #[test]
    fn unknown_unverified_user_is_404() {
        assert_eq!(OtpError::UserNotFoundOrVerified.status(), StatusCode::NOT_FOUND);
    }
}
