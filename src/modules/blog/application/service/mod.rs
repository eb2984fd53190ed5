mod blog_post_command_service;
mod blog_post_query_service;

pub use blog_post_command_service::BlogPostCommandService;
pub use blog_post_query_service::BlogPostQueryService;
