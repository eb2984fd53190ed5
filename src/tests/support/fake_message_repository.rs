use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::modules::message::application::domain::message::{Message, NewMessage};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

/// Message table kept in memory; clones share the same rows.
#[derive(Clone, Default)]
pub struct FakeMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
    failing_updates: Arc<Mutex<HashSet<Uuid>>>,
    held_unread_listing: Arc<Mutex<Option<(oneshot::Sender<()>, oneshot::Receiver<()>)>>>,
    failing: bool,
}

impl FakeMessageRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_message(self, email: &str, created_at: DateTime<Utc>, read: bool) -> Self {
        self.messages.lock().unwrap().push(Message {
            id: Uuid::new_v4(),
            name: "Visitor".to_string(),
            email: email.to_string(),
            message: "Hello, I would like to get in touch.".to_string(),
            created_at,
            read,
            read_at: read.then_some(created_at),
        });
        self
    }

    /// Read-state updates for `id` fail from now on.
    pub fn fail_updates_for(&self, id: Uuid) {
        self.failing_updates.lock().unwrap().insert(id);
    }

    /// The next `list_unread` takes its snapshot, signals the first returned
    /// channel, then waits for the second before answering.
    pub fn hold_next_unread_listing(&self) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (reached_tx, reached_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        *self.held_unread_listing.lock().unwrap() = Some((reached_tx, release_rx));
        (reached_rx, release_tx)
    }

    pub fn messages(&self) -> Vec<Message> {
        let mut messages = self.messages.lock().unwrap().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    pub fn get(&self, id: Uuid) -> Option<Message> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    fn check(&self) -> Result<(), MessageRepositoryError> {
        if self.failing {
            return Err(MessageRepositoryError::DatabaseError("db down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for FakeMessageRepository {
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        self.check()?;
        let stored = Message {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: message.created_at,
            read: false,
            read_at: None,
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        self.check()?;
        Ok(self.messages())
    }

    async fn list_unread(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        self.check()?;
        let unread: Vec<Message> = self.messages().into_iter().filter(|m| !m.read).collect();

        let held = self.held_unread_listing.lock().unwrap().take();
        if let Some((reached, release)) = held {
            let _ = reached.send(());
            let _ = release.await;
        }
        Ok(unread)
    }

    async fn set_read_state(
        &self,
        message_id: Uuid,
        read_at: Option<DateTime<Utc>>,
    ) -> Result<Message, MessageRepositoryError> {
        self.check()?;
        if self.failing_updates.lock().unwrap().contains(&message_id) {
            return Err(MessageRepositoryError::DatabaseError("update rejected".into()));
        }

        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(MessageRepositoryError::NotFound)?;
        message.read = read_at.is_some();
        message.read_at = read_at;
        Ok(message.clone())
    }

    async fn delete_message(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        self.check()?;
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != message_id);
        if messages.len() == before {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}
