pub mod jwt;
pub mod lockout_store_kv;
pub mod security;
