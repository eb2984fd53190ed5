use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::message::adapter::incoming::web::routes::{ContactReceivedResponse, ContactRequestDto};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio site and admin dashboard API"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::message::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,
            LoginRequestDto,
            LoginResponse,
            ContactRequestDto,
            ContactReceivedResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login and lockout"),
        (name = "contact", description = "Public contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
