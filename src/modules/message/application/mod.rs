pub mod domain;
pub mod message_use_cases;
pub mod ports;
pub mod service;
