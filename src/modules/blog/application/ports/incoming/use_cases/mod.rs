mod create_blog_post;
mod delete_blog_post;
mod get_blog_posts;
mod get_single_blog_post;
mod update_blog_post;

pub use create_blog_post::{CreateBlogPostError, CreateBlogPostUseCase};
pub use delete_blog_post::{DeleteBlogPostError, DeleteBlogPostUseCase};
pub use get_blog_posts::{GetBlogPostsError, GetBlogPostsUseCase};
pub use get_single_blog_post::{GetSingleBlogPostError, GetSingleBlogPostUseCase};
pub use update_blog_post::{UpdateBlogPostError, UpdateBlogPostUseCase};
