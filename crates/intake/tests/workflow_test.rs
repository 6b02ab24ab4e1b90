use async_trait::async_trait;
use core_types::StudentRecord;
use intake::{IntakeError, IntakeWorkflow, MemoryStore, RecordStore, StoreError};

/// A store whose writes always fail, for exercising the persistence
/// failure path.
struct RejectingStore;

#[async_trait]
impl RecordStore for RejectingStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _record: &StudentRecord) -> Result<(), StoreError> {
        Err(StoreError::WriteFailed("duplicate key".to_string()))
    }
}

#[tokio::test]
async fn successful_submission_is_persisted_and_returned() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    let record = workflow
        .submit("Alice", "R001", "80", "90", "70")
        .await
        .unwrap();
    assert_eq!(record.average_marks(), 80.0);

    let stored = workflow.store().list_all().await.unwrap();
    assert_eq!(stored, vec![record]);
}

#[tokio::test]
async fn missing_field_persists_nothing() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    let outcome = workflow.submit("Bob", "R002", "", "90", "70").await;
    assert!(matches!(
        outcome,
        Err(IntakeError::MissingField("math marks"))
    ));
    assert!(workflow.store().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_mark_persists_nothing() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    let outcome = workflow.submit("Carl", "R003", "105", "90", "70").await;
    assert!(matches!(
        outcome,
        Err(IntakeError::OutOfRange { field: "math marks", value: 105 })
    ));
    assert!(workflow.store().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_mark_persists_nothing() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    let outcome = workflow.submit("Dee", "R004", "50", "x", "70").await;
    assert!(matches!(
        outcome,
        Err(IntakeError::NotNumeric { field: "java marks", .. })
    ));
    assert!(workflow.store().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn records_are_listed_in_insertion_order() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    workflow
        .submit("Alice", "R001", "80", "90", "70")
        .await
        .unwrap();
    workflow
        .submit("Bob", "R002", "60", "50", "40")
        .await
        .unwrap();

    let stored = workflow.store().list_all().await.unwrap();
    let reg_numbers: Vec<&str> = stored.iter().map(|r| r.reg_number.as_str()).collect();
    assert_eq!(reg_numbers, ["R001", "R002"]);
}

#[tokio::test]
async fn listing_is_idempotent_between_inserts() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());
    workflow
        .submit("Alice", "R001", "80", "90", "70")
        .await
        .unwrap();

    let first = workflow.store().list_all().await.unwrap();
    let second = workflow.store().list_all().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn rejected_write_surfaces_as_persistence_failure() {
    let workflow = IntakeWorkflow::new(RejectingStore);

    let outcome = workflow.submit("Alice", "R001", "80", "90", "70").await;
    assert!(matches!(
        outcome,
        Err(IntakeError::PersistenceFailed(StoreError::WriteFailed(_)))
    ));
}

#[tokio::test]
async fn duplicate_registration_numbers_are_accepted_by_the_workflow() {
    let workflow = IntakeWorkflow::new(MemoryStore::new());

    workflow
        .submit("Alice", "R001", "80", "90", "70")
        .await
        .unwrap();
    workflow
        .submit("Alice Again", "R001", "10", "20", "30")
        .await
        .unwrap();

    assert_eq!(workflow.store().list_all().await.unwrap().len(), 2);
}
