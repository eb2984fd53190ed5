use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::content::application::domain::entities::{ExperienceEntry, ExperienceList};
use crate::modules::content::application::ports::incoming::use_cases::{
    ExperienceEntriesError, ExperienceEntriesUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    load_document, store_document, ContentRepository, ContentRepositoryError,
};

pub struct ExperienceEntriesService<R>
where
    R: ContentRepository,
{
    repository: R,
    // serialises read-modify-write of the list within this process
    write_guard: Mutex<()>,
}

impl<R> ExperienceEntriesService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_guard: Mutex::new(()),
        }
    }

    async fn modify<F>(&self, change: F) -> Result<ExperienceList, ExperienceEntriesError>
    where
        F: FnOnce(&mut Vec<ExperienceEntry>) -> Result<(), ExperienceEntriesError> + Send,
    {
        let _guard = self.write_guard.lock().await;

        let mut list: ExperienceList = load_document(&self.repository)
            .await
            .map_err(map_repo_err)?;

        change(&mut list.0)?;

        store_document(&self.repository, &list)
            .await
            .map_err(map_repo_err)?;

        Ok(list)
    }
}

fn map_repo_err(e: ContentRepositoryError) -> ExperienceEntriesError {
    ExperienceEntriesError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> ExperienceEntriesUseCase for ExperienceEntriesService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn add(&self, entry: ExperienceEntry) -> Result<ExperienceList, ExperienceEntriesError> {
        let entry = entry.validate()?;

        self.modify(move |entries| {
            entries.push(entry);
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        index: usize,
        entry: ExperienceEntry,
    ) -> Result<ExperienceList, ExperienceEntriesError> {
        let entry = entry.validate()?;

        self.modify(move |entries| {
            let slot = entries
                .get_mut(index)
                .ok_or(ExperienceEntriesError::IndexOutOfRange(index))?;
            *slot = entry;
            Ok(())
        })
        .await
    }

    async fn remove(&self, index: usize) -> Result<ExperienceList, ExperienceEntriesError> {
        self.modify(move |entries| {
            if index >= entries.len() {
                return Err(ExperienceEntriesError::IndexOutOfRange(index));
            }
            entries.remove(index);
            Ok(())
        })
        .await
    }
}
