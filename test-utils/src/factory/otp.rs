//! OTP factory for creating one-time passcode rows.
//!
//! Defaults describe an unused email code created now and expiring in 10 minutes.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default code stored by the factory.
pub const DEFAULT_CODE: &str = "123456";

/// Factory for creating test OTP rows owned by a user.
pub struct OtpFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    code: String,
    channel: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    is_used: bool,
}

impl<'a> OtpFactory<'a> {
    /// Creates a new OtpFactory for the given user.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            user_id,
            code: DEFAULT_CODE.to_string(),
            channel: "email".to_string(),
            created_at: now,
            expires_at: now + Duration::minutes(10),
            is_used: false,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the delivery channel, `email` or `sms`.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn used(mut self, is_used: bool) -> Self {
        self.is_used = is_used;
        self
    }

    /// Builds and inserts the OTP entity into the database.
    pub async fn build(self) -> Result<entity::otp::Model, DbErr> {
        entity::otp::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            code: ActiveValue::Set(self.code),
            channel: ActiveValue::Set(self.channel),
            expires_at: ActiveValue::Set(self.expires_at),
            is_used: ActiveValue::Set(self.is_used),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unused email OTP with the default code for the user.
pub async fn create_otp(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::otp::Model, DbErr> {
    OtpFactory::new(db, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_unused_email_otp() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await?;

        let otp = create_otp(db, user.id).await?;

        assert_eq!(otp.user_id, user.id);
        assert_eq!(otp.code, DEFAULT_CODE);
        assert_eq!(otp.channel, "email");
        assert!(!otp.is_used);
        assert!(otp.expires_at > Utc::now());

        Ok(())
    }
}
