use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Symbols allowed in passwords besides ASCII letters and digits.
const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

const MIN_PASSWORD_LENGTH: usize = 6;

/// Trims and lowercases an email, rejecting values that do not look like an address.
///
/// # Returns
/// - `Ok(String)` - Normalized email
/// - `Err(AppError::Validation)` - Empty or malformed email, naming the `email` field
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    if !EMAIL_REGEX.is_match(&email) {
        return Err(AppError::validation(
            "Please provide a valid email address",
            &["email"],
        ));
    }

    Ok(email)
}

/// Checks the password rule: at least six characters drawn from letters, digits and
/// `@$!%*#?&`, containing at least one letter and one digit.
pub fn check_password_strength(password: &str) -> Result<(), AppError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if password.chars().count() < MIN_PASSWORD_LENGTH || !allowed || !has_letter || !has_digit {
        return Err(AppError::validation(
            "Password must contain at least 6 characters including letters and numbers",
            &["password"],
        ));
    }

    Ok(())
}

/// Returns the trimmed value of a required text field or a validation error naming it.
pub fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
    message: &str,
) -> Result<&'a str, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(message, &[field])),
    }
}
