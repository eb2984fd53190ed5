use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::lockout_status::ILockoutStatusUseCase;
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::blog::adapter::incoming::web::routes::test_support::InMemoryBlog;
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::message::adapter::outgoing::KvSubmissionLogStore;
use crate::message::application::message_use_cases::MessageUseCases;
use crate::portfolio::application::ports::incoming::use_cases::GetPublicPortfolioUseCase;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::shared::clock::SystemClock;
use crate::shared::kv_store::InMemoryKeyValueStore;
use crate::tests::support::fake_content_repository::FakeContentRepository;
use crate::tests::support::fake_message_repository::FakeMessageRepository;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case the test does not care about
/// is backed by an in-memory fake or a stub.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase>,
    lockout_status: Arc<dyn ILockoutStatusUseCase>,
    content: ContentUseCases,
    project: ProjectUseCases,
    blog: BlogUseCases,
    message: MessageUseCases,
    portfolio: Arc<dyn GetPublicPortfolioUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            lockout_status: Arc::new(StubLockoutStatusUseCase),
            content: ContentUseCases::from_repository(FakeContentRepository::default()),
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            blog: InMemoryBlog::default().use_cases(),
            message: MessageUseCases::new(
                FakeMessageRepository::default(),
                KvSubmissionLogStore::new(Arc::new(InMemoryKeyValueStore::new())),
                Arc::new(SystemClock),
            ),
            portfolio: Arc::new(StubPublicPortfolioUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_lockout_status(mut self, uc: impl ILockoutStatusUseCase + 'static) -> Self {
        self.lockout_status = Arc::new(uc);
        self
    }

    pub fn with_content(mut self, content: ContentUseCases) -> Self {
        self.content = content;
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(mut self, uc: impl GetSingleProjectUseCase + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_blog(mut self, blog: BlogUseCases) -> Self {
        self.blog = blog;
        self
    }

    pub fn with_message(mut self, message: MessageUseCases) -> Self {
        self.message = message;
        self
    }

    pub fn with_portfolio(mut self, uc: impl GetPublicPortfolioUseCase + 'static) -> Self {
        self.portfolio = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            lockout_status_use_case: self.lockout_status,
            content: self.content,
            project: self.project,
            blog: self.blog,
            message: self.message,
            portfolio: self.portfolio,
        })
    }
}
