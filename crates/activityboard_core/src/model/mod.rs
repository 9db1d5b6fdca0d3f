//! Domain model for scheduled school activities.
//!
//! # Responsibility
//! - Define canonical data structures consumed by dashboard derivations.
//! - Keep wire naming aligned with the fixture catalog shape.
//!
//! # Invariants
//! - Every activity is identified by a stable, non-blank `ActivityId`.
//! - `type` and `status` are closed sets; no free-form values exist.

pub mod activity;
