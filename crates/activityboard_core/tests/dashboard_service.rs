use activityboard_core::{
    ActivityType, ClassSelector, DashboardQuery, DashboardService, SortKey,
    StaticActivityRepository, TypeSelector, ViewState, NO_MATCHES_HINT,
};
use chrono::{NaiveDate, NaiveDateTime};

fn mid_april() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

#[test]
fn selector_options_lead_with_sentinels() {
    let service = DashboardService::new(StaticActivityRepository::seeded());

    let classes = service.class_options().unwrap();
    assert_eq!(classes[0], "All Classes");
    assert_eq!(classes.len(), 8);

    let types = service.type_options().unwrap();
    assert_eq!(
        types,
        vec![
            "All Types",
            "Field Trip",
            "Sports",
            "Arts",
            "Academics",
            "Community",
            "Administration",
        ]
    );

    let sorts = service.sort_options();
    assert_eq!(sorts[0], (SortKey::StartDate, "By Start Date"));
    assert_eq!(sorts.len(), 3);
}

#[test]
fn raw_selectors_with_unknown_values_fall_back_to_no_filter() {
    let service = DashboardService::new(StaticActivityRepository::seeded());
    let query = service
        .query_from_selectors("Grade 12", "Gardening", "", "newest")
        .unwrap();

    assert_eq!(query, DashboardQuery::default());
    let view = service.build_view(&query, mid_april()).unwrap();
    assert_eq!(view.row_count(), 10);
    assert!(!view.filters_applied);
}

#[test]
fn raw_selectors_drive_full_view() {
    let service = DashboardService::new(StaticActivityRepository::seeded());
    let query = service
        .query_from_selectors("Grade 7A", "All Types", "", "startDate")
        .unwrap();
    assert_eq!(query.class, ClassSelector::Class("Grade 7A".to_string()));
    assert_eq!(query.kind, TypeSelector::All);

    let view = service.build_view(&query, mid_april()).unwrap();
    assert_eq!(view.state, ViewState::Populated);
    assert_eq!(
        view.rows.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
        vec!["ACT-001", "ACT-007"]
    );
    assert_eq!(view.timeline.date_count(), 2);
    assert_eq!(view.metrics.total, 10);
    assert_eq!(view.metrics.upcoming_this_week, 5);
}

#[test]
fn no_match_view_is_distinct_from_unfiltered_view() {
    let service = DashboardService::new(StaticActivityRepository::seeded());
    let query = DashboardQuery::default()
        .with_type(ActivityType::Sports)
        .with_search("robot");

    let view = service.build_view(&query, mid_april()).unwrap();
    assert!(view.rows.is_empty());
    assert!(view.timeline.is_empty());
    assert!(view.filters_applied);
    assert_eq!(view.state, ViewState::NoMatches);
    assert_eq!(view.state.empty_message().map(|(_, hint)| hint), Some(NO_MATCHES_HINT));
}

#[test]
fn service_accepts_borrowed_repository() {
    let repo = StaticActivityRepository::seeded();
    let service = DashboardService::new(&repo);

    let metrics = service.metrics_at(mid_april()).unwrap();
    assert_eq!(metrics.completed, 3);
    assert_eq!(metrics.advisors, 10);

    // Wall-clock variants must agree with the clock-free ones on everything
    // that does not depend on "now".
    let now_view = service.view_now(&DashboardQuery::default()).unwrap();
    assert_eq!(now_view.row_count(), repo.activities().len());
    assert_eq!(service.metrics_now().unwrap().total, 10);
}

#[test]
fn view_serializes_for_presentation_layer() {
    let service = DashboardService::new(StaticActivityRepository::seeded());
    let query = DashboardQuery::default().with_search("basketball");
    let view = service.build_view(&query, mid_april()).unwrap();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["metrics"]["upcomingThisWeek"], 5);
    assert_eq!(json["state"], "populated");
    assert_eq!(json["rows"][0]["id"], "ACT-002");
    assert_eq!(json["timeline"]["groups"]["2024-04-20"][0]["id"], "ACT-002");
}
