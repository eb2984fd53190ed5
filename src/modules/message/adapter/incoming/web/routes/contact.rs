use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::message::application::domain::contact::{ContactForm, ContactRejection};
use crate::modules::message::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::{client_key, ApiResponse};
use crate::AppState;

/// Contact form submission from the public site
#[derive(Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// 10 to 1000 characters
    #[schema(example = "I enjoyed your article on compilers and would like to chat.")]
    pub message: String,
}

impl From<ContactRequestDto> for ContactForm {
    fn from(dto: ContactRequestDto) -> Self {
        ContactForm {
            name: dto.name,
            email: dto.email,
            message: dto.message,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceivedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Send a message through the contact form
///
/// Content checks run first (required fields, email, length, spam); then
/// the caller's rate limit of 2 per minute, 5 per hour and 10 per day.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactReceivedResponse>)),
        (
            status = 400,
            description = "Rejected by a content check",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "MESSAGE_TOO_SHORT", "message": "Message must be at least 10 characters" }
            })
        ),
        (
            status = 429,
            description = "Too many messages from this client",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "RATE_LIMITED",
                    "message": "Too many messages. Please wait before sending another",
                    "details": { "reason": "minute", "timeLeft": 50 }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 503, description = "Rate limit store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    payload: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let client = client_key(&req);

    match data
        .message
        .submit_contact
        .execute(&client, payload.into_inner().into())
        .await
    {
        Ok(message) => ApiResponse::created(ContactReceivedResponse {
            id: message.id,
            created_at: message.created_at,
        }),
        Err(SubmitContactError::Rejected(rejection)) => rejection_response(&rejection),
        Err(SubmitContactError::StoreError(e)) => {
            error!("Contact submission log unavailable: {}", e);
            ApiResponse::service_unavailable(
                "CONTACT_UNAVAILABLE",
                "Contact form is temporarily unavailable",
            )
        }
        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn rejection_response(rejection: &ContactRejection) -> HttpResponse {
    match rejection {
        ContactRejection::RateLimited(limited) => ApiResponse::too_many_requests(
            rejection.code(),
            &rejection.to_string(),
            serde_json::json!({
                "reason": limited.window,
                "timeLeft": limited.time_left_secs,
            }),
        ),
        _ => ApiResponse::bad_request(rejection.code(), &rejection.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::message::adapter::outgoing::KvSubmissionLogStore;
    use crate::modules::message::application::message_use_cases::MessageUseCases;
    use crate::shared::api::custom_json_config;
    use crate::shared::clock::ManualClock;
    use crate::shared::kv_store::InMemoryKeyValueStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fake_message_repository::FakeMessageRepository;

    fn use_cases(repo: FakeMessageRepository, clock: Arc<ManualClock>) -> MessageUseCases {
        MessageUseCases::new(
            repo,
            KvSubmissionLogStore::new(Arc::new(InMemoryKeyValueStore::new())),
            clock,
        )
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2026, 7, 1, 15, 0, 0).unwrap(),
        ))
    }

    fn contact_request(message: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/contact")
            .peer_addr("203.0.113.9:4000".parse().unwrap())
            .set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": message
            }))
    }

    #[actix_web::test]
    async fn test_contact_accepted() {
        let repo = FakeMessageRepository::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(repo.clone(), clock()))
                        .build(),
                )
                .service(submit_contact_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            contact_request("Lovely portfolio, let's talk.").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], repo.messages()[0].id.to_string());
    }

    #[actix_web::test]
    async fn test_too_short_and_spam() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(FakeMessageRepository::default(), clock()))
                        .build(),
                )
                .service(submit_contact_handler),
        )
        .await;

        let resp = test::call_service(&app, contact_request("123456789").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MESSAGE_TOO_SHORT");

        let resp = test::call_service(
            &app,
            contact_request("Great offer at http://example.com").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SPAM_DETECTED");
    }

    #[actix_web::test]
    async fn test_third_message_in_a_minute_is_rate_limited() {
        let clock = clock();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(FakeMessageRepository::default(), clock.clone()))
                        .build(),
                )
                .service(submit_contact_handler),
        )
        .await;

        for text in ["First hello message", "Second hello message"] {
            let resp = test::call_service(&app, contact_request(text).to_request()).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            clock.advance_secs(4);
        }

        let resp = test::call_service(
            &app,
            contact_request("Third hello message").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RATE_LIMITED");
        assert_eq!(body["error"]["details"]["reason"], "minute");
        assert_eq!(body["error"]["details"]["timeLeft"], 52);
    }

    #[actix_web::test]
    async fn test_rotating_forwarded_for_does_not_reset_the_limit() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(FakeMessageRepository::default(), clock()))
                        .build(),
                )
                .service(submit_contact_handler),
        )
        .await;

        let mut statuses = Vec::new();
        for i in 0..3 {
            let req = contact_request("Hello there, nice work!")
                .insert_header(("X-Forwarded-For", format!("198.51.100.{i}")))
                .to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }

        assert_eq!(
            statuses,
            vec![
                StatusCode::CREATED,
                StatusCode::CREATED,
                StatusCode::TOO_MANY_REQUESTS
            ]
        );
    }

    #[actix_web::test]
    async fn test_missing_fields_are_reported_by_name() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(FakeMessageRepository::default(), clock()))
                        .build(),
                )
                .app_data(custom_json_config())
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
        assert_eq!(body["error"]["message"], "email is required");
    }

    #[actix_web::test]
    async fn test_repository_failure() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message(use_cases(FakeMessageRepository::failing(), clock()))
                        .build(),
                )
                .service(submit_contact_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            contact_request("Lovely portfolio, let's talk.").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
