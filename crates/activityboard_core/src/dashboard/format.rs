//! Display-ready schedule labels for table rows and timeline headers.

use crate::model::activity::Activity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formats a date as short weekday, short month and day, e.g. `Thu, Apr 18`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Formats an advisory time range, e.g. `09:00 - 14:00`.
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// Schedule column content for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleLabel {
    pub date: String,
    pub time_range: String,
    /// `Ends <date>` for multi-day activities only.
    pub ends: Option<String>,
}

impl ScheduleLabel {
    pub fn for_activity(activity: &Activity) -> Self {
        let ends = activity
            .is_multi_day()
            .then(|| format!("Ends {}", format_date_label(activity.end_date)));
        Self {
            date: format_date_label(activity.start_date),
            time_range: format_time_range(&activity.start_time, &activity.end_time),
            ends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date_label, format_time_range, ScheduleLabel};
    use crate::model::activity::{Activity, ActivityType};
    use chrono::NaiveDate;

    #[test]
    fn date_label_uses_short_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 18).expect("valid date");
        assert_eq!(format_date_label(date), "Thu, Apr 18");
        let date = NaiveDate::from_ymd_opt(2024, 4, 5).expect("valid date");
        assert_eq!(format_date_label(date), "Fri, Apr 5");
    }

    #[test]
    fn time_range_joins_with_dash() {
        assert_eq!(format_time_range("09:00", "14:00"), "09:00 - 14:00");
    }

    #[test]
    fn ends_label_only_for_multi_day() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 27).expect("valid date");
        let mut camp = Activity::new("ACT-004", "Camp", "Grade 7B", ActivityType::Academics, start);
        camp.start_time = "08:30".to_string();
        camp.end_time = "16:00".to_string();
        assert_eq!(ScheduleLabel::for_activity(&camp).ends, None);

        camp.end_date = NaiveDate::from_ymd_opt(2024, 4, 28).expect("valid date");
        let label = ScheduleLabel::for_activity(&camp);
        assert_eq!(label.date, "Sat, Apr 27");
        assert_eq!(label.time_range, "08:30 - 16:00");
        assert_eq!(label.ends.as_deref(), Some("Ends Sun, Apr 28"));
    }
}
