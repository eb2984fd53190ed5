use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepositoryError, ProjectResult,
};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

fn map_model_err(e: ProjectRepositoryError) -> ProjectQueryError {
    ProjectQueryError::SerializationError(e.to_string())
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| m.to_project_result().map_err(map_model_err))
            .collect()
    }

    async fn find_by_id(
        &self,
        project_id: Uuid,
    ) -> Result<Option<ProjectResult>, ProjectQueryError> {
        let model = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_project_result().map_err(map_model_err))
            .transpose()
    }
}
