use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, MarkAllReadUseCase, SubmitContactUseCase,
    UpdateReadStateUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, SubmissionLogStore,
};
use crate::modules::message::application::service::{
    InboxService, NotificationHub, SubmitContactService,
};
use crate::shared::clock::Clock;

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit_contact: Arc<dyn SubmitContactUseCase>,
    pub get_list: Arc<dyn GetMessagesUseCase>,
    pub read_state: Arc<dyn UpdateReadStateUseCase>,
    pub mark_all_read: Arc<dyn MarkAllReadUseCase>,
    pub delete: Arc<dyn DeleteMessageUseCase>,
    pub notifications: Arc<NotificationHub>,
}

impl MessageUseCases {
    /// Contact form and inbox share one repository and one notification hub.
    pub fn new<R, L>(repository: R, log_store: L, clock: Arc<dyn Clock>) -> Self
    where
        R: MessageRepository + 'static,
        L: SubmissionLogStore + 'static,
    {
        let repository: Arc<dyn MessageRepository> = Arc::new(repository);
        let notifications = Arc::new(NotificationHub::new(repository.clone()));

        let inbox = Arc::new(InboxService::new(
            repository.clone(),
            notifications.clone(),
            clock.clone(),
        ));
        let submit_contact = Arc::new(SubmitContactService::new(
            log_store,
            repository,
            notifications.clone(),
            clock,
        ));

        Self {
            submit_contact,
            get_list: inbox.clone(),
            read_state: inbox.clone(),
            mark_all_read: inbox.clone(),
            delete: inbox,
            notifications,
        }
    }
}
