pub use super::admin_audit_log::Entity as AdminAuditLog;
pub use super::failed_otp_attempt::Entity as FailedOtpAttempt;
pub use super::otp::Entity as Otp;
pub use super::user::Entity as User;
