pub mod contact;
pub mod message;
pub mod notifications;
pub mod rate_limit;
pub mod spam;
