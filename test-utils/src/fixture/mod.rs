//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. Use them for unit tests of
//! conversions and business rules that only need an entity model in memory.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let admin = fixture::user::entity_builder().role(Role::Admin).build();
//! ```

pub mod user;
