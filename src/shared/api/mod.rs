mod client;
mod json_config;
mod response;

pub use client::{client_key, TrustedProxies};
pub use json_config::custom_json_config;
pub use response::ApiResponse;
