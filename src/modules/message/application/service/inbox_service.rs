use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::message::application::domain::message::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, GetMessagesError, GetMessagesUseCase,
    MarkAllReadError, MarkAllReadReport, MarkAllReadUseCase, UpdateReadStateError,
    UpdateReadStateUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};
use crate::modules::message::application::service::NotificationHub;
use crate::shared::clock::Clock;

/// Admin side of `messages/*`. Every mutation refreshes the notification
/// summary once it has succeeded.
pub struct InboxService {
    repository: Arc<dyn MessageRepository>,
    notifications: Arc<NotificationHub>,
    clock: Arc<dyn Clock>,
}

impl InboxService {
    pub fn new(
        repository: Arc<dyn MessageRepository>,
        notifications: Arc<NotificationHub>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            notifications,
            clock,
        }
    }

    async fn set_read_state(
        &self,
        message_id: Uuid,
        read: bool,
    ) -> Result<Message, UpdateReadStateError> {
        let read_at = read.then(|| self.clock.now());

        let message = self
            .repository
            .set_read_state(message_id, read_at)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => UpdateReadStateError::NotFound,
                MessageRepositoryError::DatabaseError(msg) => {
                    UpdateReadStateError::RepositoryError(msg)
                }
            })?;

        self.notifications.refresh_or_log().await;
        Ok(message)
    }
}

#[async_trait]
impl GetMessagesUseCase for InboxService {
    async fn execute(&self) -> Result<Vec<Message>, GetMessagesError> {
        self.repository
            .list_messages()
            .await
            .map_err(|e| GetMessagesError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl UpdateReadStateUseCase for InboxService {
    async fn mark_read(&self, message_id: Uuid) -> Result<Message, UpdateReadStateError> {
        self.set_read_state(message_id, true).await
    }

    async fn mark_unread(&self, message_id: Uuid) -> Result<Message, UpdateReadStateError> {
        self.set_read_state(message_id, false).await
    }
}

#[async_trait]
impl MarkAllReadUseCase for InboxService {
    async fn execute(&self) -> Result<MarkAllReadReport, MarkAllReadError> {
        let unread = self
            .repository
            .list_unread()
            .await
            .map_err(|e| MarkAllReadError::RepositoryError(e.to_string()))?;

        let now = self.clock.now();
        let results = join_all(
            unread
                .iter()
                .map(|message| self.repository.set_read_state(message.id, Some(now))),
        )
        .await;

        let mut report = MarkAllReadReport::default();
        for (message, result) in unread.iter().zip(results) {
            match result {
                Ok(_) => report.succeeded += 1,
                Err(e) => {
                    warn!(message_id = %message.id, error = %e, "Failed to mark message read");
                    report.failed += 1;
                }
            }
        }

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "Marked all messages read"
        );
        self.notifications.refresh_or_log().await;

        Ok(report)
    }
}

#[async_trait]
impl DeleteMessageUseCase for InboxService {
    async fn execute(&self, message_id: Uuid) -> Result<(), DeleteMessageError> {
        self.repository
            .delete_message(message_id)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
                MessageRepositoryError::DatabaseError(msg) => {
                    DeleteMessageError::RepositoryError(msg)
                }
            })?;

        info!(message_id = %message_id, "Message deleted");
        self.notifications.refresh_or_log().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::ManualClock;
    use crate::tests::support::fake_message_repository::FakeMessageRepository;
    use chrono::{Duration, TimeZone, Utc};

    fn service(repo: &FakeMessageRepository) -> (InboxService, Arc<NotificationHub>) {
        let clock = Arc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap(),
        ));
        let hub = Arc::new(NotificationHub::new(Arc::new(repo.clone())));
        (
            InboxService::new(Arc::new(repo.clone()), hub.clone(), clock),
            hub,
        )
    }

    fn seeded() -> FakeMessageRepository {
        let t = Utc.with_ymd_and_hms(2026, 5, 31, 9, 0, 0).unwrap();
        FakeMessageRepository::default()
            .with_message("a@x.com", t, false)
            .with_message("b@y.com", t + Duration::minutes(1), false)
            .with_message("c@z.com", t + Duration::minutes(2), false)
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = seeded();
        let (service, _) = service(&repo);

        let messages = GetMessagesUseCase::execute(&service).await.unwrap();

        assert_eq!(messages[0].email, "c@z.com");
        assert_eq!(messages[2].email, "a@x.com");
    }

    #[tokio::test]
    async fn mark_read_touches_only_that_message() {
        let repo = seeded();
        let (service, hub) = service(&repo);
        let before = repo.messages();
        let target = before[1].id;

        let updated = service.mark_read(target).await.unwrap();

        assert!(updated.read);
        assert_eq!(
            updated.read_at,
            Some(Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap())
        );
        for (old, new) in before.iter().zip(repo.messages()) {
            if old.id != target {
                assert_eq!(*old, new);
            }
        }
        assert_eq!(hub.current().unread_count, 2);
    }

    #[tokio::test]
    async fn mark_unread_clears_read_at() {
        let repo = seeded();
        let (service, _) = service(&repo);
        let id = repo.messages()[0].id;

        service.mark_read(id).await.unwrap();
        let message = service.mark_unread(id).await.unwrap();

        assert!(!message.read);
        assert_eq!(message.read_at, None);
    }

    #[tokio::test]
    async fn mark_read_missing_message() {
        let repo = seeded();
        let (service, _) = service(&repo);

        assert!(matches!(
            service.mark_read(Uuid::new_v4()).await,
            Err(UpdateReadStateError::NotFound)
        ));
    }

    #[tokio::test]
    async fn mark_all_read_reports_partial_failure() {
        let repo = seeded();
        let (service, hub) = service(&repo);
        let stuck = repo.messages()[0].id;
        repo.fail_updates_for(stuck);

        let report = MarkAllReadUseCase::execute(&service).await.unwrap();

        assert_eq!(
            report,
            MarkAllReadReport {
                succeeded: 2,
                failed: 1
            }
        );
        assert!(!repo.get(stuck).unwrap().read);
        assert_eq!(hub.current().unread_count, 1);
    }

    #[tokio::test]
    async fn mark_all_read_with_nothing_unread() {
        let repo = FakeMessageRepository::default();
        let (service, _) = service(&repo);

        let report = MarkAllReadUseCase::execute(&service).await.unwrap();

        assert_eq!(report, MarkAllReadReport::default());
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let repo = seeded();
        let (service, hub) = service(&repo);
        let id = repo.messages()[0].id;

        DeleteMessageUseCase::execute(&service, id).await.unwrap();

        assert!(repo.get(id).is_none());
        assert_eq!(hub.current().unread_count, 2);
        assert!(matches!(
            DeleteMessageUseCase::execute(&service, id).await,
            Err(DeleteMessageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn repository_failure_on_list() {
        let repo = FakeMessageRepository::failing();
        let (service, _) = service(&repo);

        assert!(matches!(
            GetMessagesUseCase::execute(&service).await,
            Err(GetMessagesError::RepositoryError(_))
        ));
    }
}
