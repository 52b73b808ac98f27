use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{
            AdminListDto, AdminResponseDto, CreateAdminDto, CreateWorkerDto, UpdateAdminDto,
            UpdateWorkerDto, WorkerListDto, WorkerResponseDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{InviteParam, UpdateAdminParam, UpdateWorkerParam},
        service::admin::AdminService,
        state::AppState,
        util::validate::required,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

const INVITE_REQUIRED: &str = "Email, first name and last name are required";

fn admin_service(state: &AppState) -> AdminService<'_> {
    AdminService::new(&state.db, state.mailer.as_ref(), &state.frontend_url)
}

/// Invite a new admin.
///
/// The admin receives a temporary password by email.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    post,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created successfully", body = AdminResponseDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let param = InviteParam {
        email: required(&payload.email, "email", INVITE_REQUIRED)?.to_string(),
        first_name: required(&payload.first_name, "firstName", INVITE_REQUIRED)?.to_string(),
        last_name: required(&payload.last_name, "lastName", INVITE_REQUIRED)?.to_string(),
        is_super_admin: payload.is_super_admin,
        position: None,
        department: None,
    };

    let admin = admin_service(&state).create_admin(&actor, param).await?;

    Ok((
        StatusCode::CREATED,
        Json(AdminResponseDto {
            success: true,
            message: "Admin created successfully".to_string(),
            admin: admin.into_admin_dto(),
        }),
    ))
}

/// List admins, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admins", body = AdminListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let admins = admin_service(&state).list_admins().await?;

    Ok((
        StatusCode::OK,
        Json(AdminListDto {
            success: true,
            count: admins.len(),
            admins: admins.into_iter().map(|a| a.into_admin_dto()).collect(),
        }),
    ))
}

/// Update an admin's names or super flag.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    put,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    request_body = UpdateAdminDto,
    responses(
        (status = 200, description = "Admin updated successfully", body = AdminResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let param = UpdateAdminParam {
        first_name: payload.first_name,
        last_name: payload.last_name,
        is_super_admin: payload.is_super_admin,
    };

    let admin = admin_service(&state).update_admin(&actor, id, param).await?;

    Ok((
        StatusCode::OK,
        Json(AdminResponseDto {
            success: true,
            message: "Admin updated successfully".to_string(),
            admin: admin.into_admin_dto(),
        }),
    ))
}

/// Delete an admin. Super admins cannot delete themselves.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    delete,
    path = "/api/admin/admins/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "Admin deleted successfully", body = MessageDto),
        (status = 400, description = "Attempted to delete own account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    admin_service(&state).delete_admin(&actor, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Admin deleted successfully"))))
}

/// Activate or deactivate an admin. Super admins cannot deactivate themselves.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    put,
    path = "/api/admin/admins/{id}/toggle-status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "Admin status toggled", body = AdminResponseDto),
        (status = 400, description = "Attempted to deactivate own account", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a super admin", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_admin_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperAdmin])
        .await?;

    let admin = admin_service(&state).toggle_admin(&actor, id).await?;

    let message = if admin.is_active {
        "Admin activated successfully"
    } else {
        "Admin deactivated successfully"
    };

    Ok((
        StatusCode::OK,
        Json(AdminResponseDto {
            success: true,
            message: message.to_string(),
            admin: admin.into_admin_dto(),
        }),
    ))
}

/// Invite a new worker.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/workers",
    tag = ADMIN_TAG,
    request_body = CreateWorkerDto,
    responses(
        (status = 201, description = "Worker account created", body = WorkerResponseDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_worker(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWorkerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = InviteParam {
        email: required(&payload.email, "email", INVITE_REQUIRED)?.to_string(),
        first_name: required(&payload.first_name, "firstName", INVITE_REQUIRED)?.to_string(),
        last_name: required(&payload.last_name, "lastName", INVITE_REQUIRED)?.to_string(),
        is_super_admin: false,
        position: payload.position,
        department: payload.department,
    };

    let worker = admin_service(&state).create_worker(&actor, param).await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkerResponseDto {
            success: true,
            message: "Worker account created".to_string(),
            worker: worker.into_worker_dto(),
        }),
    ))
}

/// List workers, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/workers",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Workers", body = WorkerListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let workers = admin_service(&state).list_workers().await?;

    Ok((
        StatusCode::OK,
        Json(WorkerListDto {
            success: true,
            count: workers.len(),
            workers: workers.into_iter().map(|w| w.into_worker_dto()).collect(),
        }),
    ))
}

/// Update a worker's position or department.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/workers/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    request_body = UpdateWorkerDto,
    responses(
        (status = 200, description = "Worker updated successfully", body = WorkerResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_worker(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWorkerDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateWorkerParam {
        position: payload.position,
        department: payload.department,
    };

    let worker = admin_service(&state)
        .update_worker(&actor, id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(WorkerResponseDto {
            success: true,
            message: "Worker updated successfully".to_string(),
            worker: worker.into_worker_dto(),
        }),
    ))
}

/// Delete a worker.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/workers/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "Worker deleted successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_worker(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    admin_service(&state).delete_worker(&actor, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Worker deleted successfully"))))
}

/// Activate or deactivate a worker.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/workers/{id}/toggle-status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "Worker status toggled", body = WorkerResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Worker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_worker_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let worker = admin_service(&state).toggle_worker(&actor, id).await?;

    let message = if worker.is_active {
        "Worker activated successfully"
    } else {
        "Worker deactivated successfully"
    };

    Ok((
        StatusCode::OK,
        Json(WorkerResponseDto {
            success: true,
            message: message.to_string(),
            worker: worker.into_worker_dto(),
        }),
    ))
}
