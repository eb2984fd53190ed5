// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read side of `projects/*`.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest first.
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError>;

    async fn find_by_id(&self, project_id: Uuid)
        -> Result<Option<ProjectResult>, ProjectQueryError>;
}
