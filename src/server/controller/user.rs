use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserListDto, UserResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UpdateProfileParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every account.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UserListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            count: users.len(),
            data: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get one account.
///
/// Any logged-in user may look up any account.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            message: None,
            data: user.into_dto(),
        }),
    ))
}

/// Update profile fields of an account.
///
/// # Access Control
/// - Owner of the account, or `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_owner_or_admin(id)
        .await?;

    let param = UpdateProfileParam {
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone: payload.phone,
        carrier: payload.carrier,
        gender: payload.gender,
        id_type: payload.id_type,
        id_number: payload.id_number,
        prayer_in_room: payload.prayer_in_room,
        no_alcohol: payload.no_alcohol,
        zabihah_only: payload.zabihah_only,
        special_requests: payload.special_requests,
    };

    let user = UserService::new(&state.db).update_profile(id, param).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            message: Some("User updated successfully".to_string()),
            data: user.into_dto(),
        }),
    ))
}

/// Delete an account.
///
/// # Access Control
/// - Owner of the account, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_owner_or_admin(id)
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("User deleted successfully"))))
}
