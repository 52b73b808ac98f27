//! Admin audit log models.

/// Administrative mutation recorded in `admin_audit_log`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    CreateAdmin,
    UpdateAdmin,
    DeleteAdmin,
    ToggleAdminStatus,
    CreateWorker,
    UpdateWorker,
    DeleteWorker,
    ToggleWorkerStatus,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CreateAdmin => "CREATE_ADMIN",
            AuditAction::UpdateAdmin => "UPDATE_ADMIN",
            AuditAction::DeleteAdmin => "DELETE_ADMIN",
            AuditAction::ToggleAdminStatus => "TOGGLE_ADMIN_STATUS",
            AuditAction::CreateWorker => "CREATE_WORKER",
            AuditAction::UpdateWorker => "UPDATE_WORKER",
            AuditAction::DeleteWorker => "DELETE_WORKER",
            AuditAction::ToggleWorkerStatus => "TOGGLE_WORKER_STATUS",
        }
    }
}

/// Parameters for writing one audit row.
#[derive(Debug, Clone)]
pub struct CreateAuditLogParam {
    pub action: AuditAction,
    /// Admin performing the action.
    pub admin_id: i32,
    /// Account the action was applied to.
    pub target_id: i32,
    /// Free-form JSON describing the change.
    pub metadata: Option<serde_json::Value>,
}
