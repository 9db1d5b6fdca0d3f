//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into dashboard-level APIs.
//! - Keep presentation layers decoupled from data source details.

pub mod dashboard_service;
