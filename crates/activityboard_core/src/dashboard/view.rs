//! One recomputed dashboard snapshot.
//!
//! # Responsibility
//! - Run metrics, filter, sort and timeline from scratch for one query.
//! - Represent "no matches" explicitly instead of as an empty timeline.

use crate::dashboard::filter::filter_activities;
use crate::dashboard::metrics::{compute_metrics, DashboardMetrics};
use crate::dashboard::query::DashboardQuery;
use crate::dashboard::sort::sort_activities;
use crate::dashboard::timeline::Timeline;
use crate::model::activity::Activity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Empty-state headline shown when filters match nothing.
pub const NO_MATCHES_TITLE: &str = "No activities match your filters.";
/// Empty-state hint shown under [`NO_MATCHES_TITLE`].
pub const NO_MATCHES_HINT: &str = "Adjust the class, type, or keywords to broaden the view.";

/// Whether the filtered result has rows to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Populated,
    NoMatches,
}

impl ViewState {
    /// `(title, hint)` copy for the empty state; `None` when populated.
    pub fn empty_message(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Populated => None,
            Self::NoMatches => Some((NO_MATCHES_TITLE, NO_MATCHES_HINT)),
        }
    }
}

/// Output boundary for one selector state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Computed over the unfiltered collection.
    pub metrics: DashboardMetrics,
    /// Filtered rows in sort order.
    pub rows: Vec<Activity>,
    pub timeline: Timeline,
    pub state: ViewState,
    /// `false` when class/type/search are all inactive.
    pub filters_applied: bool,
}

impl DashboardView {
    /// Derives every view from the full collection.
    pub fn compute(activities: &[Activity], query: &DashboardQuery, now: NaiveDateTime) -> Self {
        let metrics = compute_metrics(activities, now);

        let mut rows = filter_activities(activities, query);
        sort_activities(&mut rows, query.sort);
        let timeline = Timeline::build(&rows);

        let state = if rows.is_empty() {
            ViewState::NoMatches
        } else {
            ViewState::Populated
        };

        Self {
            metrics,
            rows: rows.into_iter().cloned().collect(),
            timeline,
            state,
            filters_applied: !query.is_unfiltered(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
