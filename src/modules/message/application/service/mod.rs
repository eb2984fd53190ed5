mod contact_service;
mod inbox_service;
mod notification_hub;

pub use contact_service::SubmitContactService;
pub use inbox_service::InboxService;
pub use notification_hub::NotificationHub;
