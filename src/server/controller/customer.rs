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
        customer::{CreateCustomerDto, CustomerListDto, CustomerResponseDto, UpdateCustomerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{HalalPreferences, NewCustomerParam, UpdateCustomerParam},
        service::customer::CustomerService,
        state::AppState,
        util::validate::required,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

const CREATE_REQUIRED: &str = "First name, last name, email, phone, and password are required";
const UPDATE_REQUIRED: &str = "First name, last name, email, and phone are required";

const DEFAULT_GENDER: &str = "male";
const DEFAULT_ID_TYPE: &str = "passport";

/// List customers, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Customers", body = CustomerListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let customers = CustomerService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(CustomerListDto {
            success: true,
            count: customers.len(),
            customers: customers
                .into_iter()
                .map(|c| c.into_customer_dto())
                .collect(),
        }),
    ))
}

/// Create a customer on their behalf.
///
/// Missing optional fields fall back to gender `male`, ID type `passport` and empty strings.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerResponseDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = NewCustomerParam {
        first_name: required(&payload.first_name, "firstName", CREATE_REQUIRED)?.to_string(),
        last_name: required(&payload.last_name, "lastName", CREATE_REQUIRED)?.to_string(),
        email: required(&payload.email, "email", CREATE_REQUIRED)?.to_string(),
        phone: required(&payload.phone, "phone", CREATE_REQUIRED)?.to_string(),
        password: required(&payload.password, "password", CREATE_REQUIRED)?.to_string(),
        gender: payload.gender.unwrap_or_else(|| DEFAULT_GENDER.to_string()),
        id_type: payload.id_type.unwrap_or_else(|| DEFAULT_ID_TYPE.to_string()),
        id_number: payload.id_number.unwrap_or_default(),
        halal: HalalPreferences::from_optional(
            payload.prayer_in_room,
            payload.no_alcohol,
            payload.zabihah_only,
        ),
        special_requests: payload.special_requests.unwrap_or_default(),
    };

    let customer = CustomerService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerResponseDto {
            success: true,
            message: "Customer created successfully".to_string(),
            customer: customer.into_customer_dto(),
        }),
    ))
}

/// Replace a customer's details.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated successfully", body = CustomerResponseDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateCustomerParam {
        first_name: required(&payload.first_name, "firstName", UPDATE_REQUIRED)?.to_string(),
        last_name: required(&payload.last_name, "lastName", UPDATE_REQUIRED)?.to_string(),
        email: required(&payload.email, "email", UPDATE_REQUIRED)?.to_string(),
        phone: required(&payload.phone, "phone", UPDATE_REQUIRED)?.to_string(),
        gender: payload.gender.unwrap_or_else(|| DEFAULT_GENDER.to_string()),
        id_type: payload.id_type.unwrap_or_else(|| DEFAULT_ID_TYPE.to_string()),
        id_number: payload.id_number.unwrap_or_default(),
        halal: HalalPreferences::from_optional(
            payload.prayer_in_room,
            payload.no_alcohol,
            payload.zabihah_only,
        ),
        special_requests: payload.special_requests.unwrap_or_default(),
        is_active: payload.is_active.unwrap_or(true),
    };

    let customer = CustomerService::new(&state.db).update(id, param).await?;

    Ok((
        StatusCode::OK,
        Json(CustomerResponseDto {
            success: true,
            message: "Customer updated successfully".to_string(),
            customer: customer.into_customer_dto(),
        }),
    ))
}

/// Delete a customer.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CustomerService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok("Customer deleted successfully")),
    ))
}

/// Activate or deactivate a customer.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/customers/{id}/toggle-status",
    tag = CUSTOMER_TAG,
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer status toggled", body = CustomerResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_customer_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let customer = CustomerService::new(&state.db).toggle_status(id).await?;

    let message = if customer.is_active {
        "Customer activated successfully"
    } else {
        "Customer deactivated successfully"
    };

    Ok((
        StatusCode::OK,
        Json(CustomerResponseDto {
            success: true,
            message: message.to_string(),
            customer: customer.into_customer_dto(),
        }),
    ))
}
