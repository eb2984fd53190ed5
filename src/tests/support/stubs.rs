use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::lockout_status::{
    ILockoutStatusUseCase, LockoutStatus, LockoutStatusError,
};
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::portfolio::application::domain::PublicPortfolio;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectData, ProjectResult};

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _client: &str,
        _request: LoginRequest,
    ) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLockoutStatusUseCase;

#[async_trait]
impl ILockoutStatusUseCase for StubLockoutStatusUseCase {
    async fn execute(&self, _client: &str) -> Result<LockoutStatus, LockoutStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: ProjectData) -> Result<ProjectResult, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

/// Always answers with an empty project list.
#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<ProjectResult, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectResult, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

/// Serves a portfolio with every section empty.
#[derive(Default, Clone)]
pub struct StubPublicPortfolioUseCase;

#[async_trait]
impl GetPublicPortfolioUseCase for StubPublicPortfolioUseCase {
    async fn execute(&self) -> Result<PublicPortfolio, GetPublicPortfolioError> {
        Ok(PublicPortfolio::default())
    }
}
