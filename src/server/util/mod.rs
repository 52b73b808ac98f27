//! Small helpers shared by services: password hashing, random tokens and input checks.

pub mod password;
pub mod token;
pub mod validate;
