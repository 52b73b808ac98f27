use crate::server::{
    data::otp::OtpRepository,
    model::otp::{CreateOtpParam, OtpChannel},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_expired_before;
mod find_recent_unused;
mod find_valid;
mod invalidate_unused;
mod mark_used;
