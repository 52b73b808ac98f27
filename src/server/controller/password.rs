use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        password::{ForgotPasswordDto, ResetPasswordDto},
    },
    server::{
        error::AppError, service::password::PasswordService, state::AppState,
        util::validate::required,
    },
};

/// Tag for grouping password endpoints in OpenAPI documentation
pub static PASSWORD_TAG: &str = "password";

/// Mail a password reset link.
///
/// # Returns
/// - `200 OK` - Reset link sent
/// - `400 Bad Request` - Email missing
/// - `404 Not Found` - No account with that email
#[utoipa::path(
    post,
    path = "/api/password/forgot",
    tag = PASSWORD_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Password reset email sent", body = MessageDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 404, description = "No user found with that email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = required(&payload.email, "email", "Please provide a valid email address")?;

    PasswordService::new(&state.db, state.mailer.as_ref(), &state.frontend_url)
        .forgot(email)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Password reset email sent"))))
}

/// Set a new password using the token from the reset link.
///
/// # Returns
/// - `200 OK` - Password updated
/// - `400 Bad Request` - Weak password, or token invalid or expired
#[utoipa::path(
    post,
    path = "/api/password/reset-password/{token}",
    tag = PASSWORD_TAG,
    params(
        ("token" = String, Path, description = "Token from the reset link")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password updated successfully", body = MessageDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let password = payload.password.unwrap_or_default();

    PasswordService::new(&state.db, state.mailer.as_ref(), &state.frontend_url)
        .reset(&token, &password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Password updated successfully")),
    ))
}
