use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

use crate::shared::api::{client_key, ApiResponse};
use crate::AppState;

/// Lock state of the calling client, for the login form countdown.
#[get("/api/auth/lockout")]
pub async fn lockout_status_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let client = client_key(&req);

    match data.lockout_status_use_case.execute(&client).await {
        Ok(status) => ApiResponse::success(status),
        Err(e) => {
            error!("Failed to read lockout status: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::auth::application::use_cases::lockout_status::{
        ILockoutStatusUseCase, LockoutStatus, LockoutStatusError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct FixedStatus(Result<LockoutStatus, LockoutStatusError>);

    #[async_trait]
    impl ILockoutStatusUseCase for FixedStatus {
        async fn execute(&self, _client: &str) -> Result<LockoutStatus, LockoutStatusError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn returns_status() {
        let state = TestAppStateBuilder::default()
            .with_lockout_status(FixedStatus(Ok(LockoutStatus {
                locked: true,
                retry_after_secs: 9,
                remaining_attempts: 0,
            })))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(lockout_status_handler)).await;

        let req = test::TestRequest::get().uri("/api/auth/lockout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["locked"], true);
        assert_eq!(json["data"]["retryAfterSecs"], 9);
    }

    #[actix_web::test]
    async fn store_error_is_internal() {
        let state = TestAppStateBuilder::default()
            .with_lockout_status(FixedStatus(Err(LockoutStatusError::StoreError(
                "down".into(),
            ))))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(lockout_status_handler)).await;

        let req = test::TestRequest::get().uri("/api/auth/lockout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
