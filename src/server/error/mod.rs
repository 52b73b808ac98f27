//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. Domain errors such as
//! `AuthError` and `OtpError` map themselves to client-facing responses, while infrastructure
//! failures (database, session store, mail transport) are logged and collapsed into a generic
//! 500 so internal details never reach the client.

pub mod auth;
pub mod config;
pub mod internal;
pub mod mail;
pub mod otp;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, mail::MailError,
        otp::OtpError,
    },
};

/// Top-level application error type.
///
/// Most variants convert automatically through `#[from]`. Domain errors handle their own
/// response mapping, the generic variants provide standard status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 / 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// OTP issuance or verification error.
    ///
    /// Delegates to `OtpError::into_response()` (400 / 404 / 429).
    #[error(transparent)]
    OtpErr(#[from] OtpError),

    /// Outbound mail could not be built or delivered.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected internal failure such as a hashing error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found; 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request; 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Invalid request body naming the offending fields; 400.
    #[error("{message}")]
    Validation {
        /// Message returned to the client
        message: String,
        /// Request fields the message refers to
        fields: Vec<&'static str>,
    },

    /// Internal server error with custom message.
    ///
    /// The message is logged, a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Shorthand for a `Validation` error.
    pub fn validation(message: impl Into<String>, fields: &[&'static str]) -> Self {
        Self::Validation {
            message: message.into(),
            fields: fields.to_vec(),
        }
    }

    /// Maps a unique constraint violation on `user.email` to the client-facing duplicate email
    /// error, passing every other database error through unchanged.
    pub fn from_email_conflict(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::validation("Email already in use", &["email"])
            }
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr` and `OtpErr`, delegated to the domain error
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::OtpErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Validation { message, fields } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(message).with_fields(&fields)),
            )
                .into_response(),
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_bad_request() {
        let response = AppError::validation("Passwords do not match", &["password"]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_is_hidden_behind_500() {
        let response = AppError::DbErr(DbErr::Custom("disk full".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_unique_database_error_passes_through() {
        let err = AppError::from_email_conflict(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, AppError::DbErr(_)));
    }
}
