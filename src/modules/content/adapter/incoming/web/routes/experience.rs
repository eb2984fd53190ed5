use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::error;

use super::documents::{document_response, saved_response, validation_error};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::{ExperienceEntry, ExperienceList};
use crate::modules::content::application::ports::incoming::use_cases::ExperienceEntriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn entries_response(result: Result<ExperienceList, ExperienceEntriesError>) -> HttpResponse {
    match result {
        Ok(list) => ApiResponse::success(list),
        Err(ExperienceEntriesError::IndexOutOfRange(index)) => ApiResponse::not_found(
            "EXPERIENCE_NOT_FOUND",
            &format!("No experience entry at index {}", index),
        ),
        Err(ExperienceEntriesError::Validation(e)) => validation_error(&e),
        Err(ExperienceEntriesError::RepositoryError(msg)) => {
            error!("Repository error editing experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/content/experience")]
pub async fn get_experience_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    document_response(data.content.get_experience.execute().await)
}

/// Replace the whole list, e.g. after reordering.
#[put("/api/admin/content/experience")]
pub async fn save_experience_handler(
    _admin: AdminUser,
    payload: web::Json<ExperienceList>,
    data: web::Data<AppState>,
) -> impl Responder {
    saved_response(
        data.content
            .save_experience
            .execute(payload.into_inner())
            .await,
    )
}

#[post("/api/admin/content/experience")]
pub async fn add_experience_handler(
    _admin: AdminUser,
    payload: web::Json<ExperienceEntry>,
    data: web::Data<AppState>,
) -> impl Responder {
    entries_response(data.content.experience_entries.add(payload.into_inner()).await)
}

#[put("/api/admin/content/experience/{index}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<usize>,
    payload: web::Json<ExperienceEntry>,
    data: web::Data<AppState>,
) -> impl Responder {
    entries_response(
        data.content
            .experience_entries
            .update(path.into_inner(), payload.into_inner())
            .await,
    )
}

#[delete("/api/admin/content/experience/{index}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<usize>,
    data: web::Data<AppState>,
) -> impl Responder {
    entries_response(
        data.content
            .experience_entries
            .remove(path.into_inner())
            .await,
    )
}
