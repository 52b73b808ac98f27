pub mod admin_audit_log;
pub mod failed_otp_attempt;
pub mod otp;
pub mod prelude;
pub mod user;
