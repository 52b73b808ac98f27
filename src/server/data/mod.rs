//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries and return domain models from
//! `server::model`. They are generic over `ConnectionTrait` so the same repository can run
//! against the pool or inside a transaction opened by a service.

pub mod audit_log;
pub mod failed_otp_attempt;
pub mod otp;
pub mod user;

#[cfg(test)]
mod test;
