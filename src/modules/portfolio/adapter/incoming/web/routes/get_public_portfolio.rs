use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/public/portfolio")]
pub async fn get_public_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(e) => {
            error!("Failed to load public portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::content::application::domain::entities::Profile;
    use crate::modules::portfolio::application::domain::PublicPortfolio;
    use crate::modules::portfolio::application::ports::incoming::use_cases::{
        GetPublicPortfolioError, GetPublicPortfolioUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct StubPortfolio(Result<PublicPortfolio, GetPublicPortfolioError>);

    #[async_trait]
    impl GetPublicPortfolioUseCase for StubPortfolio {
        async fn execute(&self) -> Result<PublicPortfolio, GetPublicPortfolioError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<PublicPortfolio, GetPublicPortfolioError>) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_portfolio(StubPortfolio(result))
                        .build(),
                )
                .service(get_public_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/portfolio")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_only_filled_sections_are_returned() {
        let portfolio = PublicPortfolio {
            profile: Some(Profile {
                name: "Ada".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let (status, body) = call(Ok(portfolio)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["profile"]["name"], "Ada");
        assert_eq!(body["data"].as_object().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_section_failure_is_internal_error() {
        let (status, body) = call(Err(GetPublicPortfolioError::SectionUnavailable {
            section: "about",
            message: "db down".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
