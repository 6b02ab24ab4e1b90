use crate::error::DbError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

/// Establishes the connection pool to the PostgreSQL database.
///
/// Connection parameters are handed in by the caller; this crate reads no
/// environment on its own. The returned pool is meant to live for the
/// whole process, shared by every repository handle. There is no retry:
/// a failure here is the caller's decision to surface, and at startup the
/// application treats it as fatal.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, DbError> {
    if database_url.is_empty() {
        return Err(DbError::ConnectionConfigError(
            "no database URL was configured; set DATABASE_URL or the [database] url key".to_string(),
        ));
    }

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    info!(max_connections, "connected to the student database");
    Ok(pool)
}
