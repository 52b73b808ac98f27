use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserResponseDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{HalalPreferences, RegisterParam},
        service::auth::AuthService,
        state::AppState,
        util::validate::required,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new customer account.
///
/// Creates an active, unverified customer and logs them in. Verification happens separately
/// through the OTP endpoints.
///
/// # Returns
/// - `201 Created` - Account created, session established
/// - `400 Bad Request` - Missing field, mismatched or weak password, bad or taken email
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam {
        first_name: required(&payload.first_name, "firstName", "First name is required")?
            .to_string(),
        last_name: required(&payload.last_name, "lastName", "Last name is required")?
            .to_string(),
        email: required(&payload.email, "email", "Please provide a valid email address")?
            .to_string(),
        password: payload.password.clone().unwrap_or_default(),
        confirm_password: payload.confirm_password.clone().unwrap_or_default(),
        phone: payload.phone,
        carrier: payload.carrier,
        gender: payload.gender,
        id_type: payload.id_type,
        id_number: payload.id_number,
        halal: HalalPreferences::from_optional(
            payload.halal_preferences.prayer_in_room,
            payload.halal_preferences.no_alcohol,
            payload.halal_preferences.zabihah_only,
        ),
        special_requests: payload.special_requests,
    };

    let user = AuthService::new(&state.db).register(param).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            success: true,
            message: "Registration successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Session established
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (payload.email.as_deref(), payload.password.as_deref())
    else {
        return Err(AppError::validation(
            "Please provide email and password",
            &["email", "password"],
        ));
    };

    let user = AuthService::new(&state.db).login(email, password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!(user_id = user.id, "User logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            success: true,
            message: "Login successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log out and delete the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logout successful", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Logout successful"))))
}

/// Return the logged-in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Account deactivated
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            message: None,
            data: user.into_dto(),
        }),
    ))
}
