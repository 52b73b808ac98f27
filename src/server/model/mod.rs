//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary, keeping database and wire concerns out of the service layer.

pub mod audit;
pub mod otp;
pub mod user;
