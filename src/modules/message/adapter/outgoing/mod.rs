mod message_repository_postgres;
pub mod sea_orm_entity;
mod submission_log_kv;

pub use message_repository_postgres::MessageRepositoryPostgres;
pub use submission_log_kv::KvSubmissionLogStore;
