use crate::server::{
    data::audit_log::AuditLogRepository,
    model::audit::{AuditAction, CreateAuditLogParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
