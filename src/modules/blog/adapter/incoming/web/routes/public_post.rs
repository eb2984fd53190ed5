use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::admin_posts::single_post_response;
use crate::AppState;

#[get("/api/public/blog/{post_id}")]
pub async fn get_public_blog_post_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    single_post_response(post_id, data.blog.get_single.execute(post_id).await)
}
