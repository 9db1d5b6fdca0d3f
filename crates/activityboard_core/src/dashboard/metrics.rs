//! Summary metrics over the full (unfiltered) collection.
//!
//! # Invariants
//! - Metrics are a pure function of `(activities, now)`.
//! - The upcoming window is inclusive on both ends: `[today, today + 7d]`.

use crate::model::activity::{Activity, ActivityStatus};
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Length of the "upcoming this week" window, in calendar days.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Headline counters shown above the activity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total: usize,
    pub completed: usize,
    pub upcoming_this_week: usize,
    /// Distinct advisor names across all activities.
    pub advisors: usize,
}

/// Aggregates metrics relative to the local wall-clock instant `now`.
pub fn compute_metrics(activities: &[Activity], now: NaiveDateTime) -> DashboardMetrics {
    let today = now.date();
    let week_ahead = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut metrics = DashboardMetrics::default();
    let mut advisors = HashSet::new();

    for activity in activities {
        metrics.total += 1;
        if activity.status == ActivityStatus::Completed {
            metrics.completed += 1;
        }
        if activity.status == ActivityStatus::Scheduled
            && activity.start_date >= today
            && activity.start_date <= week_ahead
        {
            metrics.upcoming_this_week += 1;
        }
        advisors.insert(activity.advisor.as_str());
    }

    metrics.advisors = advisors.len();
    metrics
}
