use crate::error::IntakeError;
use crate::store::RecordStore;
use core_types::StudentRecord;
use tracing::{debug, warn};

/// Validates five raw text inputs and builds the record they describe.
///
/// Checks run in a fixed order and stop at the first failure: every field
/// must be non-empty after trimming, then the three mark fields must parse
/// as whole numbers, then each parsed mark must fall within the accepted
/// range. Name and registration number are stored trimmed.
pub fn validate(
    name: &str,
    reg_no: &str,
    math_text: &str,
    java_text: &str,
    php_text: &str,
) -> Result<StudentRecord, IntakeError> {
    let name = name.trim();
    let reg_no = reg_no.trim();
    let math_text = math_text.trim();
    let java_text = java_text.trim();
    let php_text = php_text.trim();

    let required = [
        ("name", name),
        ("registration number", reg_no),
        ("math marks", math_text),
        ("java marks", java_text),
        ("php marks", php_text),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(IntakeError::MissingField(field));
        }
    }

    // All three fields must be well-formed numbers before any range check
    // runs, so "105" in one field never masks "abc" in a later one.
    let math_marks = parse_mark("math marks", math_text)?;
    let java_marks = parse_mark("java marks", java_text)?;
    let php_marks = parse_mark("php marks", php_text)?;

    check_range("math marks", math_marks)?;
    check_range("java marks", java_marks)?;
    check_range("php marks", php_marks)?;

    Ok(StudentRecord {
        name: name.to_string(),
        reg_number: reg_no.to_string(),
        math_marks,
        java_marks,
        php_marks,
    })
}

fn parse_mark(field: &'static str, raw: &str) -> Result<i32, IntakeError> {
    // An optional leading sign is accepted; fractions, separators and
    // values too large for i32 are not.
    raw.parse::<i32>().map_err(|_| IntakeError::NotNumeric {
        field,
        value: raw.to_string(),
    })
}

fn check_range(field: &'static str, value: i32) -> Result<(), IntakeError> {
    if !(StudentRecord::MIN_MARK..=StudentRecord::MAX_MARK).contains(&value) {
        return Err(IntakeError::OutOfRange { field, value });
    }
    Ok(())
}

/// The student intake workflow.
///
/// Owns an injected `RecordStore` and nothing else; every call to
/// `submit` is independent.
#[derive(Debug)]
pub struct IntakeWorkflow<S> {
    store: S,
}

impl<S: RecordStore> IntakeWorkflow<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The store this workflow persists into.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the five raw inputs, persists the resulting record, and
    /// returns it.
    ///
    /// On a validation failure nothing is written and the caller should
    /// leave the entered values in place. On a store failure the record
    /// is discarded, not retried, and must not be shown as accepted.
    pub async fn submit(
        &self,
        name: &str,
        reg_no: &str,
        math_text: &str,
        java_text: &str,
        php_text: &str,
    ) -> Result<StudentRecord, IntakeError> {
        let record = match validate(name, reg_no, math_text, java_text, php_text) {
            Ok(record) => record,
            Err(reason) => {
                warn!(%reason, "submission rejected");
                return Err(reason);
            }
        };

        self.store.insert(&record).await?;
        debug!(reg_number = %record.reg_number, "student record persisted");
        Ok(record)
    }
}
