use crate::store::StoreError;
use thiserror::Error;

/// Why a submission was rejected.
///
/// The first three variants are user-correctable: the caller is expected
/// to keep the entered values in place so the operator can fix them.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),

    #[error("The {field} field must be a whole number, but was `{value}`.")]
    NotNumeric { field: &'static str, value: String },

    #[error("The {field} field must be between 0 and 100, but was {value}.")]
    OutOfRange { field: &'static str, value: i32 },

    #[error("The record could not be saved: {0}")]
    PersistenceFailed(#[from] StoreError),
}
