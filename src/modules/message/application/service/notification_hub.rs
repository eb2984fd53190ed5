use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::warn;

use crate::modules::message::application::domain::notifications::NotificationSummary;
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

/// Latest notification summary, pushed to every subscriber whenever the
/// unread set changes.
pub struct NotificationHub {
    repository: Arc<dyn MessageRepository>,
    sender: watch::Sender<NotificationSummary>,
    refresh_guard: Mutex<()>,
}

impl NotificationHub {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        let (sender, _) = watch::channel(NotificationSummary::default());
        Self {
            repository,
            sender,
            refresh_guard: Mutex::new(()),
        }
    }

    /// Each subscriber gets its own receiver and sees the current snapshot
    /// first.
    pub fn subscribe(&self) -> watch::Receiver<NotificationSummary> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> NotificationSummary {
        self.sender.borrow().clone()
    }

    /// Rebuild the summary from the unread messages and publish it.
    ///
    /// Refreshes are serialized from read to publish, so a slow read can never
    /// overwrite a newer snapshot.
    pub async fn refresh(&self) -> Result<NotificationSummary, MessageRepositoryError> {
        let _guard = self.refresh_guard.lock().await;
        let unread = self.repository.list_unread().await?;
        let summary = NotificationSummary::from_unread(unread);

        self.sender.send_if_modified(|current| {
            if *current == summary {
                return false;
            }
            *current = summary.clone();
            true
        });

        Ok(summary)
    }

    /// Used after message mutations, which have already succeeded by then.
    pub async fn refresh_or_log(&self) {
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Failed to refresh notification summary");
        }
    }
}
