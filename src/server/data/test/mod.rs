mod audit_log;
mod failed_otp_attempt;
mod otp;
mod user;
