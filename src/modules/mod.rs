pub mod auth;
pub mod blog;
pub mod content;
pub mod message;
pub mod portfolio;
pub mod project;
