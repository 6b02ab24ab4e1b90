use crate::error::DbError;
use async_trait::async_trait;
use core_types::StudentRecord;
use intake::{RecordStore, StoreError};
use sqlx::postgres::PgPool;
use sqlx::FromRow;
use tracing::debug;

/// The `StudentRepository` provides a high-level, application-specific
/// interface to the `students` table. It encapsulates both SQL statements
/// this application ever issues.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

/// Row shape of the pre-existing `students` table. The average is not a
/// column; it is derived on read.
#[derive(FromRow, Debug, Clone)]
struct StudentRow {
    name: String,
    reg_number: String,
    math_marks: i32,
    java_marks: i32,
    php_marks: i32,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        Self {
            name: row.name,
            reg_number: row.reg_number,
            math_marks: row.math_marks,
            java_marks: row.java_marks,
            php_marks: row.php_marks,
        }
    }
}

impl StudentRepository {
    /// Creates a new `StudentRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches every stored student, in whatever order the storage returns.
    pub async fn get_all_students(&self) -> Result<Vec<StudentRecord>, DbError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT name, reg_number, math_marks, java_marks, php_marks FROM students",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "loaded student records");
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    /// Persists a single student record as one new row.
    pub async fn save_student(&self, record: &StudentRecord) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO students (name, reg_number, math_marks, java_marks, php_marks) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&record.name)
        .bind(&record.reg_number)
        .bind(record.math_marks)
        .bind(record.java_marks)
        .bind(record.php_marks)
        .execute(&self.pool)
        .await?;

        debug!(reg_number = %record.reg_number, "saved student record");
        Ok(())
    }
}

/// Classifies a read failure: connection-class faults mean the store is
/// unavailable, anything else is a failed read over a working connection.
fn read_error(err: DbError) -> StoreError {
    match &err {
        DbError::ConnectionConfigError(_) | DbError::ConnectionError(_) => {
            StoreError::Unavailable(err.to_string())
        }
        DbError::QueryError(sqlx::Error::PoolTimedOut)
        | DbError::QueryError(sqlx::Error::Io(_)) => StoreError::Unavailable(err.to_string()),
        DbError::QueryError(_) => StoreError::ReadFailed(err.to_string()),
    }
}

#[async_trait]
impl RecordStore for StudentRepository {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        self.get_all_students().await.map_err(read_error)
    }

    async fn insert(&self, record: &StudentRecord) -> Result<(), StoreError> {
        self.save_student(record)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_record_without_touching_the_marks() {
        let row = StudentRow {
            name: "Alice".to_string(),
            reg_number: "R001".to_string(),
            math_marks: 80,
            java_marks: 90,
            php_marks: 70,
        };

        let record = StudentRecord::from(row);
        assert_eq!(record.name, "Alice");
        assert_eq!(record.reg_number, "R001");
        assert_eq!(record.average_marks(), 80.0);
    }

    #[test]
    fn connection_class_failures_map_to_unavailable() {
        let unavailable = read_error(DbError::ConnectionError("refused".to_string()));
        assert!(matches!(unavailable, StoreError::Unavailable(_)));

        let timed_out = read_error(DbError::QueryError(sqlx::Error::PoolTimedOut));
        assert!(matches!(timed_out, StoreError::Unavailable(_)));
    }

    #[test]
    fn query_failures_map_to_read_failed() {
        let failed = read_error(DbError::QueryError(sqlx::Error::RowNotFound));
        assert!(matches!(failed, StoreError::ReadFailed(_)));
    }
}
