use actix_web::{get, Responder};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;

#[get("/api/auth/me")]
pub async fn current_admin_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(serde_json::json!({ "email": admin.email }))
}
