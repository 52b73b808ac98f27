//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce the account rules
//! (password strength, email uniqueness, OTP cooldowns, self-protection for super admins),
//! coordinate multi-step writes inside transactions and deliver mail.

pub mod admin;
pub mod auth;
pub mod customer;
pub mod housekeeping;
pub mod mail;
pub mod otp;
pub mod password;
pub mod sms;
pub mod user;
