//! OTP data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::otp::{CreateOtpParam, Otp, OtpChannel};

/// Repository for one-time passcodes.
pub struct OtpRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OtpRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the newest unused code for (user, channel) created after `since`.
    ///
    /// Drives the resend cooldown.
    pub async fn find_recent_unused(
        &self,
        user_id: i32,
        channel: OtpChannel,
        since: DateTime<Utc>,
    ) -> Result<Option<Otp>, DbErr> {
        let entity = entity::prelude::Otp::find()
            .filter(entity::otp::Column::UserId.eq(user_id))
            .filter(entity::otp::Column::Channel.eq(channel.as_str()))
            .filter(entity::otp::Column::IsUsed.eq(false))
            .filter(entity::otp::Column::CreatedAt.gt(since))
            .order_by_desc(entity::otp::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Otp::from_entity))
    }

    /// Marks every unused code of (user, channel) as used.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of codes invalidated
    pub async fn invalidate_unused(&self, user_id: i32, channel: OtpChannel) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::update_many()
            .filter(entity::otp::Column::UserId.eq(user_id))
            .filter(entity::otp::Column::Channel.eq(channel.as_str()))
            .filter(entity::otp::Column::IsUsed.eq(false))
            .col_expr(entity::otp::Column::IsUsed, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn create(&self, param: CreateOtpParam) -> Result<Otp, DbErr> {
        let entity = entity::otp::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            code: ActiveValue::Set(param.code),
            channel: ActiveValue::Set(param.channel.as_str().to_string()),
            expires_at: ActiveValue::Set(param.expires_at),
            is_used: ActiveValue::Set(false),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Otp::from_entity(entity))
    }

    /// Finds an unused, unexpired code matching (user, code, channel).
    pub async fn find_valid(
        &self,
        user_id: i32,
        code: &str,
        channel: OtpChannel,
        now: DateTime<Utc>,
    ) -> Result<Option<Otp>, DbErr> {
        let entity = entity::prelude::Otp::find()
            .filter(entity::otp::Column::UserId.eq(user_id))
            .filter(entity::otp::Column::Code.eq(code))
            .filter(entity::otp::Column::Channel.eq(channel.as_str()))
            .filter(entity::otp::Column::IsUsed.eq(false))
            .filter(entity::otp::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(Otp::from_entity))
    }

    /// Consumes a code if it is still unused.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the code
    /// - `Ok(false)` - The code was already used
    pub async fn mark_used(&self, id: i32, used_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Otp::update_many()
            .filter(entity::otp::Column::Id.eq(id))
            .filter(entity::otp::Column::IsUsed.eq(false))
            .col_expr(entity::otp::Column::IsUsed, Expr::value(true))
            .col_expr(entity::otp::Column::UsedAt, Expr::value(Some(used_at)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes codes that expired before `cutoff`.
    pub async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::ExpiresAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
