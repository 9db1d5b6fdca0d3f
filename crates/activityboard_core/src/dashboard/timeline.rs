//! Date-grouped timeline built from sorted rows.
//!
//! # Invariants
//! - Each group keeps the arrival order of the sorted input.
//! - Dates iterate in ascending chronological order.
//! - Flattening never duplicates or drops a record.

use crate::model::activity::Activity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activities partitioned by exact `start_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    groups: BTreeMap<NaiveDate, Vec<Activity>>,
}

impl Timeline {
    /// Groups already filtered and sorted rows by start date.
    pub fn build(rows: &[&Activity]) -> Self {
        let mut groups: BTreeMap<NaiveDate, Vec<Activity>> = BTreeMap::new();
        for activity in rows {
            groups
                .entry(activity.start_date)
                .or_default()
                .push((*activity).clone());
        }
        Self { groups }
    }

    /// Distinct dates present, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.groups.keys().copied().collect()
    }

    pub fn group(&self, date: NaiveDate) -> Option<&[Activity]> {
        self.groups.get(&date).map(Vec::as_slice)
    }

    /// One `(date, activities)` section per date, ascending.
    pub fn sections(&self) -> impl Iterator<Item = (NaiveDate, &[Activity])> + '_ {
        self.groups
            .iter()
            .map(|(date, activities)| (*date, activities.as_slice()))
    }

    /// Concatenates all groups in date order.
    pub fn flatten(&self) -> Vec<&Activity> {
        self.groups.values().flatten().collect()
    }

    /// Number of date sections.
    pub fn date_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of activities across all sections.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Timeline;
    use crate::model::activity::{Activity, ActivityType};
    use chrono::NaiveDate;

    fn on(id: &str, day: u32) -> Activity {
        let date = NaiveDate::from_ymd_opt(2024, 4, day).expect("valid date");
        Activity::new(id, id, "Grade 6A", ActivityType::Arts, date)
    }

    #[test]
    fn groups_keep_arrival_order_and_dates_ascend() {
        // Deliberately class-sorted input: dates arrive out of order.
        let data = vec![on("x", 20), on("y", 13), on("z", 20)];
        let rows = data.iter().collect::<Vec<_>>();
        let timeline = Timeline::build(&rows);

        let april = |day| NaiveDate::from_ymd_opt(2024, 4, day).expect("valid date");
        assert_eq!(timeline.dates(), vec![april(13), april(20)]);
        let late = timeline.group(april(20)).expect("group exists");
        assert_eq!(
            late.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["x", "z"]
        );
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.date_count(), 2);
    }

    #[test]
    fn empty_rows_build_empty_timeline() {
        let timeline = Timeline::build(&[]);
        assert!(timeline.is_empty());
        assert!(timeline.dates().is_empty());
        assert_eq!(timeline.sections().count(), 0);
    }
}
