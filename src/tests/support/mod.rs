pub mod app_state_builder;
pub mod auth_helper;
pub mod fake_content_repository;
pub mod fake_message_repository;
pub mod stubs;
