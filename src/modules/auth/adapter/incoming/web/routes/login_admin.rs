use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::{client_key, ApiResponse};
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use utoipa::ToSchema;

/// Login request from the admin dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin email address
    #[schema(example = "owner@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Token lifetime in seconds
    #[schema(example = 1800)]
    expires_in: i64,

    /// Authenticated admin email
    #[schema(example = "owner@example.com")]
    email: String,
}

/// Admin login
///
/// Checks the caller's lockout record, then the credentials. Three failed
/// attempts lock the caller out for 30 seconds.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password",
                    "details": { "remainingAttempts": 2 }
                }
            })
        ),
        (
            status = 429,
            description = "Caller is locked out",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_LOCKED",
                    "message": "Too many login attempts. Try again in 30 seconds",
                    "details": { "retryAfter": 30 }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: HttpRequest,
    payload: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();
    let client = client_key(&req);

    info!(email = %dto.email, client = %client, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin_use_case.execute(&client, request).await {
        Ok(response) => ApiResponse::success(LoginResponse {
            access_token: response.access_token,
            expires_in: response.expires_in,
            email: response.email,
        }),
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match &err {
        LoginError::InvalidCredentials { remaining_attempts } => ApiResponse::error_with_details(
            actix_web::http::StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            &err.to_string(),
            Some(serde_json::json!({ "remainingAttempts": remaining_attempts })),
        ),
        LoginError::Locked { retry_after_secs } => ApiResponse::too_many_requests(
            "ACCOUNT_LOCKED",
            &err.to_string(),
            serde_json::json!({ "retryAfter": retry_after_secs }),
        ),
        LoginError::BackendUnavailable(msg) => {
            error!("Authentication backend unavailable: {}", msg);
            ApiResponse::service_unavailable("AUTH_UNAVAILABLE", "Authentication is unavailable")
        }
        LoginError::StoreError(msg) | LoginError::TokenGenerationFailed(msg) => {
            error!("Login failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
