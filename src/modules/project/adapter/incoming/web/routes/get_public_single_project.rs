use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::get_single_project::single_project_response;
use crate::AppState;

#[get("/api/public/projects/{project_id}")]
pub async fn get_public_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    single_project_response(
        project_id,
        data.project.get_single.execute(project_id).await,
    )
}
