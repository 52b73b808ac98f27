//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::mail::Mailer;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloning is cheap: the connection is a pool handle and the mailer is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Outbound mail transport used for OTPs, SMS gateway relays, resets and invitations.
    pub mailer: Arc<dyn Mailer>,

    /// Base URL of the booking frontend, used for reset and login links.
    pub frontend_url: String,

    /// Echo issued OTP codes in API responses. Only enabled in development.
    pub expose_otp: bool,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        mailer: Arc<dyn Mailer>,
        frontend_url: String,
        expose_otp: bool,
    ) -> Self {
        Self {
            db,
            mailer,
            frontend_url,
            expose_otp,
        }
    }
}
