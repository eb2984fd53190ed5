pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, blog, content, message, portfolio, project};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::lockout_store_kv::KvLockoutStore;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, ConfigAdminAuthenticator};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    lockout_status::{ILockoutStatusUseCase, LockoutStatusUseCase},
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
};
use crate::blog::adapter::outgoing::{BlogPostQueryPostgres, BlogPostRepositoryPostgres};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::content::adapter::outgoing::ContentRepositoryPostgres;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::message::adapter::outgoing::{KvSubmissionLogStore, MessageRepositoryPostgres};
use crate::message::application::message_use_cases::MessageUseCases;
use crate::portfolio::application::ports::incoming::use_cases::GetPublicPortfolioUseCase;
use crate::portfolio::application::service::PublicPortfolioService;
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    UpdateProjectService,
};
use crate::shared::api::{custom_json_config, TrustedProxies};
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::config::AppConfig;
use crate::shared::kv_store::{InMemoryKeyValueStore, KeyValueStore, RedisKeyValueStore};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase>,
    pub lockout_status_use_case: Arc<dyn ILockoutStatusUseCase>,
    pub content: ContentUseCases,
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub message: MessageUseCases,
    pub portfolio: Arc<dyn GetPublicPortfolioUseCase>,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {e}"))
}

fn project_use_cases(db: &Arc<DatabaseConnection>) -> ProjectUseCases {
    let repository = ProjectRepositoryPostgres::new(Arc::clone(db));
    let query = ProjectQueryPostgres::new(Arc::clone(db));

    ProjectUseCases {
        create: Arc::new(CreateProjectService::new(repository.clone())),
        get_list: Arc::new(GetProjectsService::new(query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(query)),
        update: Arc::new(UpdateProjectService::new(repository.clone())),
        delete: Arc::new(DeleteProjectService::new(repository)),
    }
}

/// Redis when `REDIS_URL` is set, otherwise a process-local store.
fn key_value_store(redis_url: Option<&str>) -> io::Result<Arc<dyn KeyValueStore>> {
    match redis_url {
        Some(url) => {
            let pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(|e| startup_error("Failed to create Redis pool", e))?;
            Ok(Arc::new(RedisKeyValueStore::new(Arc::new(pool))))
        }
        None => {
            warn!("REDIS_URL not set, lockout and contact logs are kept in memory");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config =
        JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT configuration", e))?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .map_err(|e| startup_error("Failed to connect to database", e))?,
    );

    let kv_store = key_value_store(config.redis_url.as_deref())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Auth
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let authenticator = ConfigAdminAuthenticator::new(
        config.admin_email.clone(),
        config.admin_password_hash.clone(),
        Arc::new(Argon2Hasher::new()),
    );
    let lockout_store = KvLockoutStore::new(Arc::clone(&kv_store));

    let login_admin_use_case = LoginAdminUseCase::new(
        lockout_store.clone(),
        Arc::new(authenticator),
        Arc::clone(&token_provider),
        Arc::clone(&clock),
    );
    let lockout_status_use_case = LockoutStatusUseCase::new(lockout_store, Arc::clone(&clock));

    // Content
    let content =
        ContentUseCases::from_repository(ContentRepositoryPostgres::new(Arc::clone(&db_arc)));
    let project = project_use_cases(&db_arc);
    let blog = BlogUseCases::new(
        BlogPostRepositoryPostgres::new(Arc::clone(&db_arc)),
        BlogPostQueryPostgres::new(Arc::clone(&db_arc)),
    );
    let message = MessageUseCases::new(
        MessageRepositoryPostgres::new(Arc::clone(&db_arc)),
        KvSubmissionLogStore::new(Arc::clone(&kv_store)),
        Arc::clone(&clock),
    );
    message.notifications.refresh_or_log().await;

    let portfolio = PublicPortfolioService::new(
        content.clone(),
        Arc::clone(&project.get_list),
        Arc::clone(&blog.get_list),
    );

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        lockout_status_use_case: Arc::new(lockout_status_use_case),
        content,
        project,
        blog,
        message,
        portfolio: Arc::new(portfolio),
    };

    let trusted_proxies = TrustedProxies::new(config.trusted_proxies.clone());

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&kv_store)))
            .app_data(web::Data::new(trusted_proxies.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::lockout_status_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_admin_handler);
    // Content documents
    cfg.service(crate::content::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_about_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::add_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_certifications_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::add_certification_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_certification_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_certification_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_public_single_project_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::create_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::update_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::delete_blog_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_public_blog_post_handler);
    // Messages
    cfg.service(crate::message::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::mark_all_messages_read_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::mark_message_unread_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::delete_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_notifications_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::notifications_stream_handler);
    // Public portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_public_portfolio_handler);
}

/// Prints the PHC string to put in `ADMIN_PASSWORD_HASH`.
#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn hash_admin_password(password: String) -> io::Result<()> {
    let hash = Argon2Hasher::new()
        .hash_password(&password)
        .await
        .map_err(|e| startup_error("Failed to hash password", e))?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let mut args = std::env::args().skip(1);
    let result = match (args.next().as_deref(), args.next()) {
        (Some("hash-password"), Some(password)) => hash_admin_password(password),
        (Some("hash-password"), None) => {
            eprintln!("Usage: portfolio_backend hash-password <password>");
            return;
        }
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e}");
    }
}
