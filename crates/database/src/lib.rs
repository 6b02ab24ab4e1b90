//! # Rollbook Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database. It is the durable home of the student roster.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** this crate encapsulates all database-specific logic. It
//!   provides a clean API to the rest of the application, hiding the
//!   underlying SQL, and implements the `RecordStore` port the intake
//!   workflow is written against.
//! - **Asynchronous & Pooled:** all operations are asynchronous and go
//!   through a single `PgPool` created once for the process lifetime.
//! - **No DDL:** the `students` table is a pre-existing external
//!   collaborator. This crate runs no migrations and performs no schema
//!   changes of any kind.
//!
//! ## Public API
//!
//! - `connect`: the async function to establish the database connection pool.
//! - `StudentRepository`: the struct that holds the connection pool and
//!   provides the two data access methods (`get_all_students`,
//!   `save_student`).
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::StudentRepository;
