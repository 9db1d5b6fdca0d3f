//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `activityboard_core` linkage.
//! - Print a deterministic summary of the built-in catalog.

use activityboard_core::{DashboardQuery, DashboardService, StaticActivityRepository};

fn main() {
    println!("activityboard_core ping={}", activityboard_core::ping());
    println!(
        "activityboard_core version={}",
        activityboard_core::core_version()
    );

    let service = DashboardService::new(StaticActivityRepository::seeded());
    match service.view_now(&DashboardQuery::default()) {
        Ok(view) => {
            println!("activities={}", view.metrics.total);
            println!("completed={}", view.metrics.completed);
            println!("advisors={}", view.metrics.advisors);
            println!("timeline_dates={}", view.timeline.date_count());
        }
        Err(err) => println!("dashboard_error={err}"),
    }
    match service.class_options() {
        // First option is the "All Classes" sentinel.
        Ok(options) => println!("classes={}", options.len().saturating_sub(1)),
        Err(err) => println!("dashboard_error={err}"),
    }
}
