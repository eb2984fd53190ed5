use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{About, Profile, SkillCategories};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetContentError, SaveContentError,
};
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldError;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response helpers shared by the content routes
// ──────────────────────────────────────────────────────────
//

pub(super) fn validation_error(e: &FieldError) -> HttpResponse {
    ApiResponse::bad_request(e.code(), &e.to_string())
}

pub(super) fn document_response<T: Serialize>(result: Result<T, GetContentError>) -> HttpResponse {
    match result {
        Ok(document) => ApiResponse::success(document),
        Err(GetContentError::RepositoryError(msg)) => {
            error!("Repository error reading content: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

pub(super) fn saved_response<T: Serialize>(result: Result<T, SaveContentError>) -> HttpResponse {
    match result {
        Ok(document) => ApiResponse::success(document),
        Err(SaveContentError::Validation(e)) => validation_error(&e),
        Err(SaveContentError::RepositoryError(msg)) => {
            error!("Repository error saving content: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/content/profile")]
pub async fn get_profile_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    document_response(data.content.get_profile.execute().await)
}

#[put("/api/admin/content/profile")]
pub async fn save_profile_handler(
    _admin: AdminUser,
    payload: web::Json<Profile>,
    data: web::Data<AppState>,
) -> impl Responder {
    saved_response(data.content.save_profile.execute(payload.into_inner()).await)
}

#[get("/api/admin/content/about")]
pub async fn get_about_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    document_response(data.content.get_about.execute().await)
}

#[put("/api/admin/content/about")]
pub async fn save_about_handler(
    _admin: AdminUser,
    payload: web::Json<About>,
    data: web::Data<AppState>,
) -> impl Responder {
    saved_response(data.content.save_about.execute(payload.into_inner()).await)
}

#[get("/api/admin/content/skills")]
pub async fn get_skills_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    document_response(data.content.get_skills.execute().await)
}

#[put("/api/admin/content/skills")]
pub async fn save_skills_handler(
    _admin: AdminUser,
    payload: web::Json<SkillCategories>,
    data: web::Data<AppState>,
) -> impl Responder {
    saved_response(data.content.save_skills.execute(payload.into_inner()).await)
}
