pub mod blog_use_cases;
pub mod ports;
pub mod service;
