//! Data source abstractions for the activity catalog.
//!
//! # Responsibility
//! - Define a read-only "list all" contract for activity data.
//! - Isolate catalog loading from dashboard derivations.
//!
//! # Invariants
//! - Repository construction enforces `Activity::validate()` for every record.
//! - Collections are immutable once a repository is built.

pub mod activity_repo;
pub mod seed;
