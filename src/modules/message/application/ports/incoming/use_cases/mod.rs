mod delete_message;
mod get_messages;
mod mark_all_read;
mod submit_contact;
mod update_read_state;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use get_messages::{GetMessagesError, GetMessagesUseCase};
pub use mark_all_read::{MarkAllReadError, MarkAllReadReport, MarkAllReadUseCase};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase};
pub use update_read_state::{UpdateReadStateError, UpdateReadStateUseCase};
