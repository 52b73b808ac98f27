//! Admin audit log repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::audit::CreateAuditLogParam;

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one audit row. Metadata is stored as JSON text.
    pub async fn create(&self, param: CreateAuditLogParam) -> Result<(), DbErr> {
        entity::admin_audit_log::ActiveModel {
            action: ActiveValue::Set(param.action.as_str().to_string()),
            admin_id: ActiveValue::Set(param.admin_id),
            target_id: ActiveValue::Set(param.target_id),
            metadata: ActiveValue::Set(param.metadata.map(|m| m.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
