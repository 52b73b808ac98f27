//! Wire DTOs exchanged with API clients.
//!
//! Every DTO serializes with camelCase field names, matching what the booking frontend sends
//! and expects.

pub mod admin;
pub mod api;
pub mod auth;
pub mod customer;
pub mod otp;
pub mod password;
pub mod user;
