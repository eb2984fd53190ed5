use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(super) fn single_project_response(
    project_id: Uuid,
    result: Result<ProjectResult, GetSingleProjectError>,
) -> HttpResponse {
    match result {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!("Repository error fetching project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/projects/{project_id}")]
pub async fn get_single_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    single_project_response(
        project_id,
        data.project.get_single.execute(project_id).await,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectUseCase;
    use crate::modules::project::application::service::test_support::sample_project;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token_provider, bearer};

    struct MockGetSingle(Result<ProjectResult, GetSingleProjectError>);

    #[async_trait]
    impl GetSingleProjectUseCase for MockGetSingle {
        async fn execute(&self, _id: Uuid) -> Result<ProjectResult, GetSingleProjectError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<ProjectResult, GetSingleProjectError>) -> StatusCode {
        let state = TestAppStateBuilder::default()
            .with_get_single_project(MockGetSingle(result))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token_provider())
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_found() {
        assert_eq!(call(Ok(sample_project("A"))).await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_not_found() {
        assert_eq!(
            call(Err(GetSingleProjectError::NotFound)).await,
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_invalid_uuid_path_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token_provider())
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects/not-a-uuid")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_body_shape() {
        let project = sample_project("Shape");
        let state = TestAppStateBuilder::default()
            .with_get_single_project(MockGetSingle(Ok(project.clone())))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(admin_token_provider())
                .service(get_single_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/admin/projects/{}", project.id))
            .insert_header(bearer())
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["data"]["id"], project.id.to_string());
        assert!(body["data"].get("projectUrl").is_none());
        assert!(body["data"]["createdAt"].is_string());
    }
}
