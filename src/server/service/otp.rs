//! One-time passcode issuance and verification.
//!
//! Issuing a code invalidates every unused code of the same user and channel, stores the new
//! one and delivers it, all inside one transaction so a failed delivery leaves no usable code
//! behind. Verification consumes a matching code and records every miss; repeated misses
//! lock the account out of verification for a while.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        failed_otp_attempt::FailedOtpAttemptRepository, otp::OtpRepository,
        user::UserRepository,
    },
    error::{otp::OtpError, AppError},
    model::{
        otp::{CreateOtpParam, OtpChannel},
        user::User,
    },
    service::{
        mail::{templates, Mailer},
        sms::{gateway_address, SmsService},
    },
};

pub const OTP_LENGTH: usize = 6;
pub const OTP_EXPIRY_MINUTES: i64 = 10;

/// Minimum gap between two codes for the same user and channel.
pub const RESEND_COOLDOWN_SECONDS: i64 = 60;

/// Failed verifications tolerated inside `FAILED_ATTEMPT_WINDOW_MINUTES`.
pub const MAX_FAILED_ATTEMPTS: u64 = 5;
pub const FAILED_ATTEMPT_WINDOW_MINUTES: i64 = 15;

const SMS_MESSAGE_TEMPLATE: &str = "Your verification code is: {otp}. Valid for {minutes} minutes.";

/// Generates `OTP_LENGTH` uniformly random decimal digits.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();

    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

pub struct OtpService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> OtpService<'a> {
    /// Creates a new OtpService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `mailer` - Transport used for both email and SMS gateway delivery
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Issues a code to a logged-in user.
    ///
    /// # Returns
    /// - `Ok(String)` - The code that was delivered
    /// - `Err(AppError::OtpErr(Cooldown))` - A code was issued less than a minute ago
    /// - `Err(AppError::OtpErr(_))` - Already verified, or no usable phone/carrier for SMS
    /// - `Err(AppError::NotFound)` - The user no longer exists
    /// - `Err(AppError::MailErr)` - Delivery failed; nothing was stored
    pub async fn request(&self, user_id: i32, channel: OtpChannel) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        self.check_cooldown(user_id, channel).await?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        self.issue(&user, channel).await
    }

    /// Issues a code to an account that cannot log in yet, identified by email or phone.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The matched account and the delivered code
    /// - `Err(AppError::OtpErr(UserNotFoundOrVerified))` - No unverified account matched
    /// - Otherwise the same errors as `request`
    pub async fn request_unverified(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
        channel: OtpChannel,
    ) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());

        let Some(user) = user_repo
            .find_unverified_by_contact(email.as_deref(), phone)
            .await?
        else {
            return Err(OtpError::UserNotFoundOrVerified.into());
        };

        self.check_cooldown(user.id, channel).await?;

        let code = self.issue(&user, channel).await?;

        Ok((user, code))
    }

    /// Verifies a submitted code and consumes it.
    ///
    /// A successful email verification also marks the account verified. Misses are recorded
    /// and committed even though the call fails.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched and was consumed
    /// - `Err(AppError::OtpErr(InvalidFormat))` - Code is not six digits
    /// - `Err(AppError::OtpErr(TooManyAttempts))` - Lockout window is active
    /// - `Err(AppError::OtpErr(InvalidOrExpired))` - No unused, unexpired code matched
    pub async fn verify(
        &self,
        user_id: i32,
        submitted: &str,
        channel: OtpChannel,
    ) -> Result<(), AppError> {
        let code = submitted.trim();
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(OtpError::InvalidFormat.into());
        }

        let now = Utc::now();
        let failures = FailedOtpAttemptRepository::new(self.db)
            .count_since(user_id, now - Duration::minutes(FAILED_ATTEMPT_WINDOW_MINUTES))
            .await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            tracing::warn!(user_id, failures, "OTP verification locked out");
            return Err(OtpError::TooManyAttempts.into());
        }

        let txn = self.db.begin().await?;
        let otp_repo = OtpRepository::new(&txn);

        let Some(otp) = otp_repo.find_valid(user_id, code, channel, now).await? else {
            FailedOtpAttemptRepository::new(&txn)
                .create(user_id, code, channel)
                .await?;
            txn.commit().await?;

            tracing::info!(user_id, channel = channel.as_str(), "OTP verification failed");
            return Err(OtpError::InvalidOrExpired.into());
        };

        if !otp_repo.mark_used(otp.id, now).await? {
            txn.rollback().await?;

            tracing::info!(user_id, otp_id = otp.id, "OTP consumed by a concurrent verification");
            return Err(OtpError::InvalidOrExpired.into());
        }
        if channel == OtpChannel::Email {
            UserRepository::new(&txn).set_verified(user_id).await?;
        }
        txn.commit().await?;

        tracing::info!(user_id, channel = channel.as_str(), "OTP verified");

        Ok(())
    }

    async fn check_cooldown(&self, user_id: i32, channel: OtpChannel) -> Result<(), AppError> {
        let now = Utc::now();
        let since = now - Duration::seconds(RESEND_COOLDOWN_SECONDS);

        if let Some(recent) = OtpRepository::new(self.db)
            .find_recent_unused(user_id, channel, since)
            .await?
        {
            let available_at = recent.created_at + Duration::seconds(RESEND_COOLDOWN_SECONDS);
            let remaining_ms = (available_at - now).num_milliseconds();
            let seconds = ((remaining_ms + 999) / 1000).max(1);

            return Err(OtpError::Cooldown(seconds).into());
        }

        Ok(())
    }

    /// Replaces the user's codes for `channel` with a fresh one and delivers it.
    async fn issue(&self, user: &User, channel: OtpChannel) -> Result<String, AppError> {
        // SMS target is resolved before anything is written
        let sms_target = match channel {
            OtpChannel::Email => {
                if user.is_verified {
                    return Err(OtpError::AlreadyVerified.into());
                }
                None
            }
            OtpChannel::Sms => {
                let (Some(phone), Some(carrier)) = (&user.phone, &user.carrier) else {
                    return Err(OtpError::PhoneNotRegistered.into());
                };
                gateway_address(phone, carrier)?;
                Some((phone.as_str(), carrier.as_str()))
            }
        };

        let code = generate_otp();

        let txn = self.db.begin().await?;
        let otp_repo = OtpRepository::new(&txn);

        otp_repo.invalidate_unused(user.id, channel).await?;
        otp_repo
            .create(CreateOtpParam {
                user_id: user.id,
                code: code.clone(),
                channel,
                expires_at: Utc::now() + Duration::minutes(OTP_EXPIRY_MINUTES),
            })
            .await?;

        let delivery = match sms_target {
            None => self
                .mailer
                .send(templates::otp_email(&user.email, &code, OTP_EXPIRY_MINUTES))
                .await
                .map_err(AppError::from),
            Some((phone, carrier)) => {
                let message = SMS_MESSAGE_TEMPLATE
                    .replace("{otp}", &code)
                    .replace("{minutes}", &OTP_EXPIRY_MINUTES.to_string());
                SmsService::new(self.mailer)
                    .send(phone, carrier, &message)
                    .await
            }
        };

        if let Err(e) = delivery {
            txn.rollback().await?;
            tracing::error!(
                user_id = user.id,
                channel = channel.as_str(),
                error = %e,
                "OTP delivery failed"
            );
            return Err(e);
        }

        txn.commit().await?;

        tracing::info!(user_id = user.id, channel = channel.as_str(), "OTP issued");

        Ok(code)
    }
}
