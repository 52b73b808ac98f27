use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Typically happens after an account was deleted while its session was still alive.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// Email or password did not match a stored account.
    ///
    /// Both cases share one message so the response does not reveal which emails exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account has been deactivated by an administrator.
    #[error("User {0} is deactivated")]
    AccountInactive(i32),

    /// User lacks a permission required by the route.
    ///
    /// # Fields
    /// - `user_id` - The user that was denied
    /// - `message` - Client-facing message
    /// - `code` - Machine readable code such as `SUPER_ADMIN_REQUIRED`
    #[error("User {user_id} denied: {code}")]
    AccessDenied {
        user_id: i32,
        message: &'static str,
        code: &'static str,
    },

    /// User tried to act on another user's account without being an admin.
    #[error("User {actor_id} does not own account {target_id}")]
    NotOwner { actor_id: i32, target_id: i32 },
}

/// Converts authentication errors into HTTP responses.
///
/// Details such as user IDs are logged at debug level only.
///
/// # Returns
/// - 401 Unauthorized - Missing session, missing user or bad credentials
/// - 403 Forbidden - Inactive account, missing permission or foreign account
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authorized, please log in")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid credentials").with_fields(&["email", "password"])),
            )
                .into_response(),
            Self::AccountInactive(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "Account has been deactivated, please contact support",
                )),
            )
                .into_response(),
            Self::AccessDenied { message, code, .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(message).with_code(code)),
            )
                .into_response(),
            Self::NotOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Not authorized to perform this action")),
            )
                .into_response(),
        }
    }
}
