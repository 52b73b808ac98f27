use rand::Rng;
use sha2::{Digest, Sha256};

/// Characters used for invite passwords. Look-alike characters (0/O, 1/l/I) are left out.
const TEMP_PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789!@#$%";

/// Length of passwords generated for invited admins and workers.
pub const TEMP_PASSWORD_LENGTH: usize = 12;

/// Number of random bytes in a password reset token.
const RESET_TOKEN_BYTES: usize = 32;

/// Generates a temporary password for an invited account.
pub fn generate_temp_password(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| TEMP_PASSWORD_CHARSET[rng.random_range(0..TEMP_PASSWORD_CHARSET.len())] as char)
        .collect()
}

/// Generates a password reset token as 64 lowercase hex characters.
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);

    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// SHA-256 hex digest of a reset token, the form stored in the database.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_password_uses_charset() {
        let password = generate_temp_password(TEMP_PASSWORD_LENGTH);

        assert_eq!(password.len(), TEMP_PASSWORD_LENGTH);
        assert!(password.bytes().all(|b| TEMP_PASSWORD_CHARSET.contains(&b)));
    }

    #[test]
    fn reset_token_is_64_hex_chars() {
        let token = generate_reset_token();

        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_reset_token());
    }

    #[test]
    fn token_hash_is_stable_sha256() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
