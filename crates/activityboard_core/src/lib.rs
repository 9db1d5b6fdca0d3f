//! Core domain logic for the school activities dashboard.
//! This crate is the single source of truth for catalog invariants and
//! every derived dashboard view.

pub mod dashboard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dashboard::filter::filter_activities;
pub use dashboard::format::{format_date_label, format_time_range, ScheduleLabel};
pub use dashboard::metrics::{compute_metrics, DashboardMetrics, UPCOMING_WINDOW_DAYS};
pub use dashboard::query::{
    ClassSelector, DashboardQuery, SortKey, TypeSelector, ALL_CLASSES_LABEL, ALL_TYPES_LABEL,
};
pub use dashboard::sort::sort_activities;
pub use dashboard::timeline::Timeline;
pub use dashboard::view::{DashboardView, ViewState, NO_MATCHES_HINT, NO_MATCHES_TITLE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{
    Activity, ActivityId, ActivityStatus, ActivityType, ActivityValidationError,
};
pub use repo::activity_repo::{
    ActivityRepository, RepoError, RepoResult, StaticActivityRepository,
};
pub use service::dashboard_service::DashboardService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
