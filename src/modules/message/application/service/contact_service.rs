use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::message::application::domain::contact::{ContactForm, ContactRejection};
use crate::modules::message::application::domain::message::{Message, NewMessage};
use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, SubmissionLogStore,
};
use crate::modules::message::application::service::NotificationHub;
use crate::shared::clock::Clock;
use crate::shared::keyed_mutex::KeyedMutex;

/// Public contact form: content checks, then the per-client rate limit,
/// then storage.
///
/// The submission log is loaded, checked and saved while holding the client's
/// lock, so two concurrent submissions from one client cannot both pass on a
/// stale log.
pub struct SubmitContactService<L>
where
    L: SubmissionLogStore,
{
    log_store: L,
    repository: Arc<dyn MessageRepository>,
    notifications: Arc<NotificationHub>,
    clock: Arc<dyn Clock>,
    client_locks: KeyedMutex,
}

impl<L> SubmitContactService<L>
where
    L: SubmissionLogStore,
{
    pub fn new(
        log_store: L,
        repository: Arc<dyn MessageRepository>,
        notifications: Arc<NotificationHub>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            log_store,
            repository,
            notifications,
            clock,
            client_locks: KeyedMutex::new(),
        }
    }
}

#[async_trait]
impl<L> SubmitContactUseCase for SubmitContactService<L>
where
    L: SubmissionLogStore,
{
    async fn execute(
        &self,
        client: &str,
        form: ContactForm,
    ) -> Result<Message, SubmitContactError> {
        let contact = form.validate().inspect_err(|rejection| match rejection {
            ContactRejection::Spam(signal) => {
                info!(client, signal = signal.as_str(), "Contact message rejected as spam")
            }
            other => info!(client, code = other.code(), "Contact message rejected"),
        })?;

        let message = {
            let _guard = self.client_locks.lock(client).await;
            let now = self.clock.now();

            let log = self
                .log_store
                .load(client)
                .await
                .map_err(|e| SubmitContactError::StoreError(e.to_string()))?
                .pruned(now);

            if let Err(limited) = log.check(now) {
                info!(
                    client,
                    reason = limited.window.as_str(),
                    time_left = limited.time_left_secs,
                    "Contact submission rate limited"
                );
                return Err(ContactRejection::RateLimited(limited).into());
            }

            let message = self
                .repository
                .create_message(NewMessage {
                    name: contact.name,
                    email: contact.email,
                    message: contact.message,
                    created_at: now,
                })
                .await
                .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

            if let Err(e) = self.log_store.save(client, &log.record(now)).await {
                warn!(client, error = %e, "Failed to persist contact submission log");
            }
            message
        };

        info!(message_id = %message.id, "Contact message stored");
        self.notifications.refresh_or_log().await;

        Ok(message)
    }
}
