//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let customer = factory::user::create_user(&db).await?;
//! let admin = factory::user::UserFactory::new(&db)
//!     .admin()
//!     .super_admin(true)
//!     .build()
//!     .await?;
//! let otp = factory::otp::OtpFactory::new(&db, customer.id).code("123456").build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities of any role
//! - `otp` - Create one-time passcode entities
//! - `helpers` - ID generation and password hashing shared by factories

pub mod helpers;
pub mod otp;
pub mod user;

pub use otp::create_otp;
pub use user::{create_admin, create_super_admin, create_user, create_worker};
