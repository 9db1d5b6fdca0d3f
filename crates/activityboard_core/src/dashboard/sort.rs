//! Sort stage over filtered rows.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their filter-stage order.
//! - `StartDate` compares calendar dates only; time-of-day is ignored.

use crate::dashboard::query::SortKey;
use crate::model::activity::Activity;
use std::cmp::Ordering;

/// Sorts rows in place by `key` using a stable sort.
pub fn sort_activities(rows: &mut [&Activity], key: SortKey) {
    match key {
        SortKey::StartDate => rows.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
        SortKey::ClassName => rows.sort_by(|a, b| locale_compare(&a.class_name, &b.class_name)),
        SortKey::Type => rows.sort_by(|a, b| locale_compare(a.kind.label(), b.kind.label())),
    }
}

/// Case-insensitive ordering; on a case-only tie lowercase sorts first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::{locale_compare, sort_activities};
    use crate::dashboard::query::SortKey;
    use crate::model::activity::{Activity, ActivityType};
    use chrono::NaiveDate;
    use std::cmp::Ordering;

    fn at(id: &str, class_name: &str, kind: ActivityType, day: u32) -> Activity {
        let date = NaiveDate::from_ymd_opt(2024, 4, day).expect("valid date");
        Activity::new(id, id, class_name, kind, date)
    }

    fn ids(rows: &[&Activity]) -> Vec<String> {
        rows.iter().map(|activity| activity.id.clone()).collect()
    }

    #[test]
    fn locale_compare_ignores_case_before_tiebreak() {
        assert_eq!(locale_compare("faculty", "Grade 6A"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Arts", "Arts"), Ordering::Equal);
    }

    #[test]
    fn start_date_sort_is_stable_for_same_day() {
        let data = vec![
            at("late", "Grade 6A", ActivityType::Arts, 20),
            at("first", "Grade 6A", ActivityType::Arts, 13),
            at("second", "Grade 6A", ActivityType::Arts, 13),
        ];
        let mut rows = data.iter().collect::<Vec<_>>();
        sort_activities(&mut rows, SortKey::StartDate);
        assert_eq!(ids(&rows), vec!["first", "second", "late"]);
    }

    #[test]
    fn type_sort_uses_labels() {
        let data = vec![
            at("s", "Grade 6A", ActivityType::Sports, 1),
            at("f", "Grade 6A", ActivityType::FieldTrip, 2),
            at("a", "Grade 6A", ActivityType::Academics, 3),
        ];
        let mut rows = data.iter().collect::<Vec<_>>();
        sort_activities(&mut rows, SortKey::Type);
        assert_eq!(ids(&rows), vec!["a", "f", "s"]);
    }

    #[test]
    fn class_sort_places_faculty_before_grades() {
        let data = vec![
            at("g8", "Grade 8A", ActivityType::Arts, 1),
            at("fac", "Faculty", ActivityType::Arts, 2),
            at("g6", "Grade 6B", ActivityType::Arts, 3),
        ];
        let mut rows = data.iter().collect::<Vec<_>>();
        sort_activities(&mut rows, SortKey::ClassName);
        assert_eq!(ids(&rows), vec!["fac", "g6", "g8"]);
    }
}
