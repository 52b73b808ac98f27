use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        otp::{OtpSentDto, RequestOtpDto, RequestOtpUnverifiedDto, VerifyOtpDto},
    },
    server::{
        error::{otp::OtpError, AppError},
        middleware::auth::AuthGuard,
        model::otp::OtpChannel,
        service::otp::OtpService,
        state::AppState,
    },
};

/// Tag for grouping OTP endpoints in OpenAPI documentation
pub static OTP_TAG: &str = "otp";

/// Send a one-time passcode to the logged-in user.
///
/// Rate limited per client IP in addition to the per-account resend cooldown.
///
/// # Returns
/// - `200 OK` - Code sent; the code itself is echoed in development
/// - `400 Bad Request` - Already verified, unknown type, or no usable phone for SMS
/// - `401 Unauthorized` - Not logged in
/// - `429 Too Many Requests` - Cooldown or IP rate limit active
#[utoipa::path(
    post,
    path = "/api/otp/request",
    tag = OTP_TAG,
    request_body = RequestOtpDto,
    responses(
        (status = 200, description = "OTP sent", body = OtpSentDto),
        (status = 400, description = "OTP cannot be sent to this account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 429, description = "Requested too recently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RequestOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let channel = OtpChannel::parse(payload.kind.as_deref())?;

    let code = OtpService::new(&state.db, state.mailer.as_ref())
        .request(user.id, channel)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OtpSentDto {
            success: true,
            message: format!("OTP sent via {}", channel.as_str()),
            otp: state.expose_otp.then_some(code),
        }),
    ))
}

/// Verify a passcode for the logged-in user.
///
/// # Returns
/// - `200 OK` - Code accepted; email codes also verify the account
/// - `400 Bad Request` - Malformed, wrong or expired code
/// - `401 Unauthorized` - Not logged in
/// - `429 Too Many Requests` - Too many failed attempts
#[utoipa::path(
    post,
    path = "/api/otp/verify",
    tag = OTP_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Account verified successfully", body = MessageDto),
        (status = 400, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 429, description = "Too many failed attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let channel = OtpChannel::parse(payload.kind.as_deref())?;

    let code = match payload.otp {
        Some(serde_json::Value::String(code)) => code,
        Some(serde_json::Value::Number(code)) => code.to_string(),
        _ => return Err(OtpError::InvalidFormat.into()),
    };

    OtpService::new(&state.db, state.mailer.as_ref())
        .verify(user.id, &code, channel)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Account verified successfully")),
    ))
}

/// Send a passcode to an account that has not been verified yet.
///
/// Looks the account up by email or phone instead of the session, so it works before the
/// first login.
///
/// # Returns
/// - `200 OK` - Code sent
/// - `404 Not Found` - No unverified account matches
/// - `429 Too Many Requests` - Cooldown active
#[utoipa::path(
    post,
    path = "/api/otp/request-unverified",
    tag = OTP_TAG,
    request_body = RequestOtpUnverifiedDto,
    responses(
        (status = 200, description = "OTP sent", body = OtpSentDto),
        (status = 400, description = "OTP cannot be sent to this account", body = ErrorDto),
        (status = 404, description = "User not found or already verified", body = ErrorDto),
        (status = 429, description = "Requested too recently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_otp_unverified(
    State(state): State<AppState>,
    Json(payload): Json<RequestOtpUnverifiedDto>,
) -> Result<impl IntoResponse, AppError> {
    let channel = OtpChannel::parse(payload.kind.as_deref())?;

    let (_, code) = OtpService::new(&state.db, state.mailer.as_ref())
        .request_unverified(payload.email.as_deref(), payload.phone.as_deref(), channel)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OtpSentDto {
            success: true,
            message: "OTP sent".to_string(),
            otp: state.expose_otp.then_some(code),
        }),
    ))
}
