pub mod project_query;
pub mod project_repository;

pub use project_query::{ProjectQuery, ProjectQueryError};
pub use project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};
