pub mod message_repository;
pub mod submission_log_store;

pub use message_repository::{MessageRepository, MessageRepositoryError};
pub use submission_log_store::{SubmissionLogStore, SubmissionLogStoreError};
