use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::modules::content::application::domain::document::ContentKey;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

/// Document store kept in memory; clones share the same documents.
#[derive(Clone, Default)]
pub struct FakeContentRepository {
    documents: Arc<Mutex<HashMap<ContentKey, JsonValue>>>,
    writes: Arc<Mutex<usize>>,
    failing: bool,
}

impl FakeContentRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_document(self, key: ContentKey, value: JsonValue) -> Self {
        self.documents.lock().unwrap().insert(key, value);
        self
    }

    pub fn document(&self, key: ContentKey) -> Option<JsonValue> {
        self.documents.lock().unwrap().get(&key).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl ContentRepository for FakeContentRepository {
    async fn get_document(
        &self,
        key: ContentKey,
    ) -> Result<Option<JsonValue>, ContentRepositoryError> {
        if self.failing {
            return Err(ContentRepositoryError::DatabaseError("db down".into()));
        }
        Ok(self.document(key))
    }

    async fn put_document(
        &self,
        key: ContentKey,
        data: JsonValue,
    ) -> Result<(), ContentRepositoryError> {
        if self.failing {
            return Err(ContentRepositoryError::DatabaseError("db down".into()));
        }
        self.documents.lock().unwrap().insert(key, data);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
