use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load connection settings for the database: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),

    #[error("A database query failed: {0}")]
    QueryError(#[from] sqlx::Error),
}
