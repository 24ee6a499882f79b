//! # Gold Medal Aggregation Engine
//!
//! This crate answers the questions the rest of the system asks about the medal
//! table: which countries exist and how many golds each has won, and what a
//! single country's record looks like split by season and by athlete gender.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** The engine knows nothing about PostgreSQL or HTTP. It
//!   pulls rows through the `RecordStore` trait and depends only on `core-types`.
//! - **Stateless Calculation:** Every call re-reads the store and derives its
//!   result from scratch. Nothing is cached between calls, so one engine can be
//!   shared freely across tasks.
//! - **Silent Fallbacks:** Unknown sort keys are not errors. The country listing
//!   falls back to medal-count order; the per-country medal listing returns an
//!   empty list.
//!
//! ## Public API
//!
//! - `AggregationEngine`: The three query operations.
//! - `RecordStore`: The read-only data source the engine consumes.
//! - `MemoryStore`: A `RecordStore` over in-memory vectors, loadable from JSON.
//! - `CountrySummary`, `CountryDetails`: The derived result types.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod memory;
pub mod report;
pub mod sort;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AggregationEngine;
pub use error::AggregationError;
pub use memory::MemoryStore;
pub use report::{CountryDetails, CountrySummary};
pub use sort::{CountrySortKey, MedalSortKey};
pub use store::RecordStore;
