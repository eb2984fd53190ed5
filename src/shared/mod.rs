pub mod api;
pub mod clock;
pub mod config;
pub mod keyed_mutex;
pub mod kv_store;
pub mod validation;
