use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostError, DeleteBlogPostError, GetBlogPostsError, GetSingleBlogPostError,
    UpdateBlogPostError,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostData, BlogPostResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn post_not_found() -> HttpResponse {
    ApiResponse::not_found("BLOG_POST_NOT_FOUND", "Blog post not found")
}

pub(super) fn single_post_response(
    post_id: Uuid,
    result: Result<BlogPostResult, GetSingleBlogPostError>,
) -> HttpResponse {
    match result {
        Ok(post) => ApiResponse::success(post),
        Err(GetSingleBlogPostError::NotFound) => post_not_found(),
        Err(GetSingleBlogPostError::RepositoryError(e)) => {
            error!("Repository error fetching blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/blog")]
pub async fn get_blog_posts_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.get_list.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(GetBlogPostsError::RepositoryError(e)) => {
            error!("Repository error listing blog posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/blog")]
pub async fn create_blog_post_handler(
    _admin: AdminUser,
    payload: web::Json<BlogPostData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create.execute(payload.into_inner()).await {
        Ok(post) => ApiResponse::created(post),
        Err(CreateBlogPostError::Validation(e)) => {
            ApiResponse::bad_request(e.code(), &e.to_string())
        }
        Err(CreateBlogPostError::RepositoryError(e)) => {
            error!("Repository error creating blog post: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/blog/{post_id}")]
pub async fn get_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    single_post_response(post_id, data.blog.get_single.execute(post_id).await)
}

#[put("/api/admin/blog/{post_id}")]
pub async fn update_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    payload: web::Json<BlogPostData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.update.execute(post_id, payload.into_inner()).await {
        Ok(post) => ApiResponse::success(post),
        Err(UpdateBlogPostError::NotFound) => post_not_found(),
        Err(UpdateBlogPostError::Validation(e)) => {
            ApiResponse::bad_request(e.code(), &e.to_string())
        }
        Err(UpdateBlogPostError::RepositoryError(e)) => {
            error!("Repository error updating blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/blog/{post_id}")]
pub async fn delete_blog_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.delete.execute(post_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteBlogPostError::NotFound) => post_not_found(),
        Err(DeleteBlogPostError::RepositoryError(e)) => {
            error!("Repository error deleting blog post {}: {}", post_id, e);
            ApiResponse::internal_error()
        }
    }
}
