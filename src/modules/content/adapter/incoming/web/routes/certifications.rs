use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::error;

use super::documents::{document_response, validation_error};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::application::domain::entities::Certification;
use crate::modules::content::application::ports::incoming::use_cases::CertificationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn certification_error(err: CertificationsError) -> HttpResponse {
    match err {
        CertificationsError::NotFound => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }
        CertificationsError::Validation(e) => validation_error(&e),
        CertificationsError::RepositoryError(msg) => {
            error!("Repository error editing certifications: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/content/certifications")]
pub async fn get_certifications_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    document_response(data.content.get_certifications.execute().await)
}

#[post("/api/admin/content/certifications")]
pub async fn add_certification_handler(
    _admin: AdminUser,
    payload: web::Json<Certification>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.certifications.add(payload.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => certification_error(e),
    }
}

#[put("/api/admin/content/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    payload: web::Json<Certification>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .content
        .certifications
        .update(&path.into_inner(), payload.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => certification_error(e),
    }
}

#[delete("/api/admin/content/certifications/{id}")]
pub async fn delete_certification_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.certifications.remove(&path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => certification_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::application::content_use_cases::ContentUseCases;
    use crate::modules::content::application::domain::document::ContentKey;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token_provider, bearer};
    use crate::tests::support::fake_content_repository::FakeContentRepository;

    fn seeded() -> FakeContentRepository {
        FakeContentRepository::default().with_document(
            ContentKey::Certifications,
            json!([{ "id": "c1", "title": "CKA", "organization": "CNCF", "issueDate": "2023-01" }]),
        )
    }

    macro_rules! certifications_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_content(ContentUseCases::from_repository($repo))
                            .build(),
                    )
                    .app_data(admin_token_provider())
                    .service(get_certifications_handler)
                    .service(add_certification_handler)
                    .service(update_certification_handler)
                    .service(delete_certification_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn add_returns_created_with_generated_id() {
        let app = certifications_app!(seeded());

        let req = test::TestRequest::post()
            .uri("/api/admin/content/certifications")
            .insert_header(bearer())
            .set_json(json!({
                "title": "CKS",
                "organization": "CNCF",
                "issueDate": "2024-05",
                "files": [{ "type": "image", "url": "https://files.example.com/cks.png" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["data"]["id"].as_str().unwrap().is_empty());
        assert_eq!(body["data"]["files"][0]["type"], "image");
    }

    #[actix_web::test]
    async fn update_unknown_id_is_not_found() {
        let app = certifications_app!(seeded());

        let req = test::TestRequest::put()
            .uri("/api/admin/content/certifications/zzz")
            .insert_header(bearer())
            .set_json(json!({ "title": "CKS", "organization": "CNCF", "issueDate": "2024-05" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_returns_no_content() {
        let repo = seeded();
        let app = certifications_app!(repo.clone());

        let req = test::TestRequest::delete()
            .uri("/api/admin/content/certifications/c1")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(repo.document(ContentKey::Certifications).unwrap(), json!([]));
    }

    #[actix_web::test]
    async fn list_returns_stored_certifications() {
        let app = certifications_app!(seeded());

        let req = test::TestRequest::get()
            .uri("/api/admin/content/certifications")
            .insert_header(bearer())
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["data"][0]["id"], "c1");
    }
}
