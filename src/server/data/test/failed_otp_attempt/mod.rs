use crate::server::{data::failed_otp_attempt::FailedOtpAttemptRepository, model::otp::OtpChannel};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_since;
