use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::{max_chars, optional_url, required, FieldError};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostData {
    pub title: String,
    /// Post body as authored in the dashboard editor
    pub content: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl BlogPostData {
    /// Tags are trimmed, lower-cased and de-duplicated in order.
    pub fn validated(self) -> Result<Self, FieldError> {
        let title = required("title", &self.title)?;
        max_chars("title", &title, 200)?;

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(BlogPostData {
            title,
            content: self.content,
            tags,
            image: optional_url("image", self.image.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResult {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_post(&self, data: BlogPostData)
        -> Result<BlogPostResult, BlogPostRepositoryError>;

    async fn update_post(
        &self,
        post_id: Uuid,
        data: BlogPostData,
    ) -> Result<BlogPostResult, BlogPostRepositoryError>;

    async fn delete_post(&self, post_id: Uuid) -> Result<(), BlogPostRepositoryError>;
}
