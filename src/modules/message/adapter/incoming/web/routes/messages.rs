use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::message::application::domain::message::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageError, GetMessagesError, MarkAllReadError, UpdateReadStateError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn message_not_found() -> HttpResponse {
    ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
}

fn read_state_response(
    message_id: Uuid,
    result: Result<Message, UpdateReadStateError>,
) -> HttpResponse {
    match result {
        Ok(message) => ApiResponse::success(message),
        Err(UpdateReadStateError::NotFound) => message_not_found(),
        Err(UpdateReadStateError::RepositoryError(e)) => {
            error!("Repository error updating message {}: {}", message_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/messages")]
pub async fn get_messages_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.message.get_list.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(GetMessagesError::RepositoryError(e)) => {
            error!("Repository error listing messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/admin/messages/{message_id}/read")]
pub async fn mark_message_read_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();
    read_state_response(message_id, data.message.read_state.mark_read(message_id).await)
}

#[patch("/api/admin/messages/{message_id}/unread")]
pub async fn mark_message_unread_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();
    read_state_response(
        message_id,
        data.message.read_state.mark_unread(message_id).await,
    )
}

/// Responds 200 even when some updates failed; the report says how many.
#[post("/api/admin/messages/read-all")]
pub async fn mark_all_messages_read_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.mark_all_read.execute().await {
        Ok(report) => ApiResponse::success(report),
        Err(MarkAllReadError::RepositoryError(e)) => {
            error!("Repository error marking all messages read: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/messages/{message_id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.delete.execute(message_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteMessageError::NotFound) => message_not_found(),
        Err(DeleteMessageError::RepositoryError(e)) => {
            error!("Repository error deleting message {}: {}", message_id, e);
            ApiResponse::internal_error()
        }
    }
}
