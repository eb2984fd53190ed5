use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogPostsUseCase, GetSingleBlogPostUseCase,
    UpdateBlogPostUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogPostQuery, BlogPostRepository};
use crate::modules::blog::application::service::{BlogPostCommandService, BlogPostQueryService};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogPostUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleBlogPostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBlogPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogPostUseCase + Send + Sync>,
}

impl BlogUseCases {
    pub fn new<R, Q>(repository: R, query: Q) -> Self
    where
        R: BlogPostRepository + 'static,
        Q: BlogPostQuery + 'static,
    {
        let commands = Arc::new(BlogPostCommandService::new(repository));
        let queries = Arc::new(BlogPostQueryService::new(query));

        Self {
            create: commands.clone(),
            update: commands.clone(),
            delete: commands,
            get_list: queries.clone(),
            get_single: queries,
        }
    }
}
