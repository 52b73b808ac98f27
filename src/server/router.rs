use std::{sync::Arc, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorError,
    GovernorLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{admin, api, auth, customer, otp, password, user},
    server::{
        controller::{
            admin::{
                create_admin, create_worker, delete_admin, delete_worker, get_admins,
                get_workers, toggle_admin_status, toggle_worker_status, update_admin,
                update_worker,
            },
            auth::{get_user, login, logout, register},
            customer::{
                create_customer, delete_customer, get_customers, toggle_customer_status,
                update_customer,
            },
            health::health,
            otp::{request_otp, request_otp_unverified, verify_otp},
            password::{forgot_password, reset_password},
            user::{delete_user, get_users, update_user},
        },
        error::{AppError, InternalServerError},
        state::AppState,
    },
};

/// Requests allowed per client IP on the OTP request route before throttling.
const OTP_RATE_LIMIT_BURST: u32 = 3;

/// One request is replenished every 5 minutes, i.e. 3 per 15 minutes.
const OTP_RATE_LIMIT_PERIOD: Duration = Duration::from_secs(300);

const OTP_RATE_LIMIT_MESSAGE: &str = "Too many OTP requests. Please try again in 15 minutes.";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sufrikh Accounts API",
        description = "Customer, worker and admin accounts for the Sufrikh booking platform"
    ),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "password", description = "Password reset"),
        (name = "otp", description = "One-time passcode verification"),
        (name = "user", description = "Account profiles"),
        (name = "customer", description = "Customer management"),
        (name = "admin", description = "Admin and worker management"),
    ),
    paths(
        crate::server::controller::health::health,
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::get_user,
        crate::server::controller::password::forgot_password,
        crate::server::controller::password::reset_password,
        crate::server::controller::otp::request_otp,
        crate::server::controller::otp::verify_otp,
        crate::server::controller::otp::request_otp_unverified,
        crate::server::controller::user::get_users,
        crate::server::controller::user::get_user,
        crate::server::controller::user::update_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::customer::get_customers,
        crate::server::controller::customer::create_customer,
        crate::server::controller::customer::update_customer,
        crate::server::controller::customer::delete_customer,
        crate::server::controller::customer::toggle_customer_status,
        crate::server::controller::admin::create_admin,
        crate::server::controller::admin::get_admins,
        crate::server::controller::admin::update_admin,
        crate::server::controller::admin::delete_admin,
        crate::server::controller::admin::toggle_admin_status,
        crate::server::controller::admin::create_worker,
        crate::server::controller::admin::get_workers,
        crate::server::controller::admin::update_worker,
        crate::server::controller::admin::delete_worker,
        crate::server::controller::admin::toggle_worker_status,
    ),
    components(schemas(
        api::ErrorDto,
        api::MessageDto,
        api::HealthDto,
        auth::RegisterDto,
        auth::HalalPreferencesDto,
        auth::LoginDto,
        auth::AuthResponseDto,
        password::ForgotPasswordDto,
        password::ResetPasswordDto,
        otp::RequestOtpDto,
        otp::RequestOtpUnverifiedDto,
        otp::VerifyOtpDto,
        otp::OtpSentDto,
        user::UserDto,
        user::UserListDto,
        user::UserResponseDto,
        user::UpdateUserDto,
        customer::CustomerDto,
        customer::CustomerListDto,
        customer::CustomerResponseDto,
        customer::CreateCustomerDto,
        customer::UpdateCustomerDto,
        admin::AdminDto,
        admin::AdminListDto,
        admin::AdminResponseDto,
        admin::CreateAdminDto,
        admin::UpdateAdminDto,
        admin::WorkerDto,
        admin::WorkerListDto,
        admin::WorkerResponseDto,
        admin::CreateWorkerDto,
        admin::UpdateWorkerDto,
    ))
)]
pub struct ApiDoc;

/// Builds every API route.
///
/// The OTP request route is additionally rate limited per peer IP, which requires the
/// server to be started with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn router() -> Result<Router<AppState>, AppError> {
    let otp_rate_limit = GovernorConfigBuilder::default()
        .period(OTP_RATE_LIMIT_PERIOD)
        .burst_size(OTP_RATE_LIMIT_BURST)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid OTP rate limit configuration".to_string()))?;

    let otp_request = Router::new()
        .route("/api/otp/request", post(request_otp))
        .layer(GovernorLayer::new(Arc::new(otp_rate_limit)).error_handler(otp_rate_limited));

    let router = Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/password/forgot", post(forgot_password))
        .route("/api/password/reset-password/{token}", post(reset_password))
        .merge(otp_request)
        .route("/api/otp/verify", post(verify_otp))
        .route("/api/otp/request-unverified", post(request_otp_unverified))
        .route("/api/users", get(get_users))
        .route(
            "/api/users/{id}",
            get(crate::server::controller::user::get_user)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/api/customers", get(get_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            put(update_customer).delete(delete_customer),
        )
        .route(
            "/api/customers/{id}/toggle-status",
            put(toggle_customer_status),
        )
        .route("/api/admin/admins", get(get_admins).post(create_admin))
        .route(
            "/api/admin/admins/{id}",
            put(update_admin).delete(delete_admin),
        )
        .route(
            "/api/admin/admins/{id}/toggle-status",
            put(toggle_admin_status),
        )
        .route("/api/admin/workers", get(get_workers).post(create_worker))
        .route(
            "/api/admin/workers/{id}",
            put(update_worker).delete(delete_worker),
        )
        .route(
            "/api/admin/workers/{id}/toggle-status",
            put(toggle_worker_status),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()));

    Ok(router)
}

/// Renders limiter rejections in the same JSON shape as every other API error.
fn otp_rate_limited(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(api::ErrorDto::new(OTP_RATE_LIMIT_MESSAGE)),
        )
            .into_response(),
        err => InternalServerError(format!("OTP rate limiter failed: {err:?}")).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route_group() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/health",
            "/api/auth/register",
            "/api/password/reset-password/{token}",
            "/api/otp/request-unverified",
            "/api/users/{id}",
            "/api/customers/{id}/toggle-status",
            "/api/admin/workers/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
