//! Shared helper utilities for factory methods.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand_core::OsRng;

/// Password used for every factory-created account unless overridden.
pub const DEFAULT_PASSWORD: &str = "Password123";

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a plain-text password into an argon2 PHC string.
///
/// Mirrors the server's hashing so factory users can log in with their password.
///
/// # Panics
/// Panics if argon2 rejects the input, which only happens for absurdly long passwords.
pub fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .unwrap_or_else(|e| panic!("failed to hash test password: {e}"))
}
