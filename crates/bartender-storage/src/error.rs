use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid database url: {0}")]
    InvalidUrl(String),

    #[error("database connection failed: {0}")]
    Connect(String),

    #[error("schema setup failed: {0}")]
    Schema(String),

    #[error("insert into {table} failed: {message}")]
    Insert { table: &'static str, message: String },
}
