//! Dashboard use-case service.
//!
//! # Responsibility
//! - Provide selector option lists and recomputed dashboard snapshots.
//! - Delegate data access to repository implementations.
//!
//! # Invariants
//! - Every call recomputes from the repository's full collection.
//! - Only the `*_now` entry points read the wall clock.
//! - Free-text search input is never logged verbatim.

use crate::dashboard::metrics::{compute_metrics, DashboardMetrics};
use crate::dashboard::query::{DashboardQuery, SortKey, ALL_CLASSES_LABEL, ALL_TYPES_LABEL};
use crate::dashboard::view::DashboardView;
use crate::repo::activity_repo::{ActivityRepository, RepoResult};
use chrono::{Local, NaiveDateTime};
use log::debug;

/// Use-case service wrapper over an activity data source.
pub struct DashboardService<R: ActivityRepository> {
    repo: R,
}

impl<R: ActivityRepository> DashboardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Class selector options, sentinel first.
    pub fn class_options(&self) -> RepoResult<Vec<String>> {
        let mut options = vec![ALL_CLASSES_LABEL.to_string()];
        options.extend(self.repo.class_names()?);
        Ok(options)
    }

    /// Type selector options, sentinel first.
    pub fn type_options(&self) -> RepoResult<Vec<String>> {
        let mut options = vec![ALL_TYPES_LABEL.to_string()];
        options.extend(
            self.repo
                .activity_types()?
                .into_iter()
                .map(|kind| kind.label().to_string()),
        );
        Ok(options)
    }

    /// `(key, label)` pairs for the sort selector.
    pub fn sort_options(&self) -> Vec<(SortKey, &'static str)> {
        SortKey::ALL.into_iter().map(|key| (key, key.label())).collect()
    }

    /// Builds a query from raw selector strings using this catalog's classes.
    pub fn query_from_selectors(
        &self,
        class: &str,
        kind: &str,
        search: &str,
        sort: &str,
    ) -> RepoResult<DashboardQuery> {
        let known_classes = self.repo.class_names()?;
        Ok(DashboardQuery::from_selectors(
            class,
            kind,
            search,
            sort,
            &known_classes,
        ))
    }

    /// Aggregates metrics over the full collection at `now`.
    pub fn metrics_at(&self, now: NaiveDateTime) -> RepoResult<DashboardMetrics> {
        let activities = self.repo.list_activities()?;
        Ok(compute_metrics(&activities, now))
    }

    /// Aggregates metrics at the local wall-clock instant.
    pub fn metrics_now(&self) -> RepoResult<DashboardMetrics> {
        self.metrics_at(Local::now().naive_local())
    }

    /// Recomputes the full dashboard snapshot for `query` at `now`.
    pub fn build_view(&self, query: &DashboardQuery, now: NaiveDateTime) -> RepoResult<DashboardView> {
        let activities = self.repo.list_activities()?;
        let view = DashboardView::compute(&activities, query, now);

        debug!(
            "event=dashboard_view module=service status=ok total={} rows={} dates={} sort={} search_len={}",
            view.metrics.total,
            view.row_count(),
            view.timeline.date_count(),
            query.sort.value(),
            query.search.trim().chars().count()
        );

        Ok(view)
    }

    /// Recomputes the snapshot at the local wall-clock instant.
    pub fn view_now(&self, query: &DashboardQuery) -> RepoResult<DashboardView> {
        self.build_view(query, Local::now().naive_local())
    }
}
