//! Periodic cleanup of expired verification state.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        failed_otp_attempt::FailedOtpAttemptRepository, otp::OtpRepository,
        user::UserRepository,
    },
    error::AppError,
};

/// How long expired codes and failed attempts are kept before deletion.
pub const RETENTION_HOURS: i64 = 24;

/// Rows removed by one cleanup pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub otps: u64,
    pub failed_attempts: u64,
    pub reset_tokens: u64,
}

pub struct HousekeepingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HousekeepingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes OTPs that expired more than a day ago and failed attempts older than a day,
    /// and clears expired password reset tokens.
    pub async fn cleanup(&self) -> Result<CleanupReport, AppError> {
        let now = Utc::now();
        let cutoff = now - Duration::hours(RETENTION_HOURS);

        let report = CleanupReport {
            otps: OtpRepository::new(self.db).delete_expired_before(cutoff).await?,
            failed_attempts: FailedOtpAttemptRepository::new(self.db)
                .delete_before(cutoff)
                .await?,
            reset_tokens: UserRepository::new(self.db)
                .clear_expired_reset_tokens(now)
                .await?,
        };

        tracing::debug!(?report, "Housekeeping pass finished");

        Ok(report)
    }
}
