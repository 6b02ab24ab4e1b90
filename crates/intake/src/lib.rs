//! # Rollbook Intake Crate
//!
//! This crate owns the student intake workflow: it turns five raw text
//! inputs into a validated `StudentRecord` or a rejection reason, persists
//! the record through an injected store, and reports the outcome to the
//! caller.
//!
//! ## Architectural Principles
//!
//! - **Pure core:** validation is a plain function with no I/O, so every
//!   rejection path can be tested without a database or a rendering
//!   surface.
//! - **Ports, not globals:** durable storage is reached through the
//!   `RecordStore` trait. The caller constructs a store and hands it to
//!   the workflow; nothing in this crate opens connections on its own.
//! - **Stateless between calls:** each `submit` is independent. The only
//!   lifecycle worth naming is a single submission's path, entered to
//!   validated to persisted, or rejected at the first failing check.
//!
//! ## Public API
//!
//! - `IntakeWorkflow`: the submit entry point, generic over a store.
//! - `validate`: the standalone validation step.
//! - `RecordStore` / `StoreError`: the storage port and its error
//!   vocabulary.
//! - `MemoryStore`: an insertion-ordered in-memory store for tests and
//!   database-free embedding.
//! - `IntakeError`: the rejection reasons a submission can produce.

// Declare the modules that constitute this crate.
pub mod error;
pub mod store;
pub mod workflow;

// Re-export the key components to create a clean, public-facing API.
pub use error::IntakeError;
pub use store::{MemoryStore, RecordStore, StoreError};
pub use workflow::{validate, IntakeWorkflow};
