use thiserror::Error;

/// Internal issues indicating unexpected behavior or possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message returned to
/// the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A row that was just written could not be read back.
    #[error("User {0} disappeared after write")]
    MissingAfterWrite(i32),
}
