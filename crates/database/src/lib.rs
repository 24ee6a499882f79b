//! # Gold Medal Database Crate
//!
//! This crate is the PostgreSQL-backed `RecordStore` for the aggregation engine.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the application sees only the
//!   `RecordStore` trait and the `Country` / `GoldMedal` types.
//! - **Boundary Normalisation:** Season and gender columns are compared
//!   case-insensitively in SQL and parsed into enums when rows are read, so the
//!   engine only ever sees canonical values.
//! - **Asynchronous & Pooled:** All operations are asynchronous over a shared
//!   `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: Establishes the connection pool.
//! - `run_migrations`: Applies the embedded schema migrations.
//! - `DbRepository`: The `RecordStore` implementation.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
