//! Pure dashboard derivations.
//!
//! # Responsibility
//! - Turn an activity collection plus selector state into metrics, rows and
//!   a date-grouped timeline.
//! - Keep every derivation a pure function of its inputs.
//!
//! # Invariants
//! - No derivation reads the wall clock; "now" is always a parameter.
//! - Every view is recomputed from the full collection on each call.

pub mod filter;
pub mod format;
pub mod metrics;
pub mod query;
pub mod sort;
pub mod timeline;
pub mod view;
