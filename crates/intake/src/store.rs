use async_trait::async_trait;
use core_types::StudentRecord;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Storage faults as the workflow sees them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached at all. Fatal when it happens
    /// during the initial load; reported and survived otherwise.
    #[error("The student store is unavailable: {0}")]
    Unavailable(String),

    #[error("Reading the student records failed: {0}")]
    ReadFailed(String),

    /// The insert was rejected (constraint violation, connectivity loss,
    /// any write fault). Never retried.
    #[error("Writing the student record failed: {0}")]
    WriteFailed(String),
}

/// Port for durable storage of student records.
///
/// Implementations own their connection; the workflow only ever borrows
/// the store. `list_all` returns records in storage-native order with no
/// further guarantee.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError>;

    async fn insert(&self, record: &StudentRecord) -> Result<(), StoreError>;
}

/// An insertion-ordered in-memory store.
///
/// Backs the workflow tests, and lets an embedding context run the intake
/// tool without a database at all.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StudentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    async fn insert(&self, record: &StudentRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}
