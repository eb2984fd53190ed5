use actix_web::{get, web, Responder};
use futures::stream::{self, Stream};
use tokio::sync::watch;
use tracing::{debug, error};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::message::application::domain::notifications::NotificationSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Unread badge count and the sender groups for the dropdown.
#[get("/api/admin/notifications")]
pub async fn get_notifications_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.notifications.refresh().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(e) => {
            error!("Repository error building notifications: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Server-sent events: the current summary right away, then one event per
/// change. The receiver is dropped with the connection.
#[get("/api/admin/notifications/stream")]
pub async fn notifications_stream_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let receiver = data.message.notifications.subscribe();

    actix_web::HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(notification_events(receiver))
}

fn notification_events(
    receiver: watch::Receiver<NotificationSummary>,
) -> impl Stream<Item = Result<web::Bytes, actix_web::Error>> {
    stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            debug!("Notification hub closed, ending stream");
            return None;
        }

        let summary = receiver.borrow_and_update().clone();
        Some((Ok(sse_event(&summary)), (receiver, false)))
    })
}

fn sse_event(summary: &NotificationSummary) -> web::Bytes {
    let payload = serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string());
    web::Bytes::from(format!("event: notifications\ndata: {payload}\n\n"))
}
