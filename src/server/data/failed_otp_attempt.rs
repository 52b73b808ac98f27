//! Failed OTP attempt repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::otp::OtpChannel;

/// Repository recording wrong codes submitted for verification.
pub struct FailedOtpAttemptRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FailedOtpAttemptRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a failed verification.
    ///
    /// # Arguments
    /// - `user_id` - Account that submitted the code
    /// - `attempted_code` - The submitted code, already trimmed
    /// - `channel` - Channel the code was submitted for
    pub async fn create(
        &self,
        user_id: i32,
        attempted_code: &str,
        channel: OtpChannel,
    ) -> Result<(), DbErr> {
        entity::failed_otp_attempt::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            attempted_code: ActiveValue::Set(attempted_code.to_string()),
            channel: ActiveValue::Set(channel.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Counts a user's failures after `since`, across channels.
    pub async fn count_since(&self, user_id: i32, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::FailedOtpAttempt::find()
            .filter(entity::failed_otp_attempt::Column::UserId.eq(user_id))
            .filter(entity::failed_otp_attempt::Column::CreatedAt.gt(since))
            .count(self.db)
            .await
    }

    /// Deletes attempts recorded before `cutoff`.
    pub async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::FailedOtpAttempt::delete_many()
            .filter(entity::failed_otp_attempt::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
