//! Activity domain model.
//!
//! # Responsibility
//! - Define the canonical activity record shared by table and timeline views.
//! - Provide label conversions for the closed `type`/`status` sets.
//!
//! # Invariants
//! - `id` is stable and unique inside one catalog.
//! - `end_date` is never earlier than `start_date`.
//! - `start_time`/`end_time` are advisory strings; no timezone is modeled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable opaque identifier for one activity, e.g. `ACT-001`.
pub type ActivityId = String;

/// Program category of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Field Trip")]
    FieldTrip,
    Sports,
    Arts,
    Academics,
    Community,
    Administration,
}

impl ActivityType {
    /// All types in catalog display order.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::FieldTrip,
        ActivityType::Sports,
        ActivityType::Arts,
        ActivityType::Academics,
        ActivityType::Community,
        ActivityType::Administration,
    ];

    /// Display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::FieldTrip => "Field Trip",
            Self::Sports => "Sports",
            Self::Arts => "Arts",
            Self::Academics => "Academics",
            Self::Community => "Community",
            Self::Administration => "Administration",
        }
    }

    /// Parses an exact display label.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == value)
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    /// Planned and not yet held.
    Scheduled,
    /// Already held.
    Completed,
    /// Called off.
    Cancelled,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::Scheduled,
        ActivityStatus::Completed,
        ActivityStatus::Cancelled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == value)
    }
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation error for activity record invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    /// `id` is empty or whitespace only.
    EmptyId,
    /// `end_date` is earlier than `start_date`.
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "activity id cannot be empty"),
            Self::InvalidDateRange { start, end } => {
                write!(f, "endDate ({end}) must be >= startDate ({start})")
            }
        }
    }
}

impl Error for ActivityValidationError {}

/// Canonical scheduled-activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    /// One of the catalog class names, e.g. `Grade 7A` or `Faculty`.
    pub class_name: String,
    /// Serialized as `type` to match the catalog schema.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    /// Staff member or team responsible for the activity.
    pub advisor: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Advisory `HH:MM` string.
    pub start_time: String,
    /// Advisory `HH:MM` string.
    pub end_time: String,
    pub status: ActivityStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Activity {
    /// Creates a single-day scheduled activity with empty optional fields.
    ///
    /// Used by fixtures and tests; catalog loading goes through serde.
    pub fn new(
        id: impl Into<ActivityId>,
        title: impl Into<String>,
        class_name: impl Into<String>,
        kind: ActivityType,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            class_name: class_name.into(),
            kind,
            description: String::new(),
            advisor: String::new(),
            location: String::new(),
            start_date: date,
            end_date: date,
            start_time: String::new(),
            end_time: String::new(),
            status: ActivityStatus::Scheduled,
            tags: Vec::new(),
            notes: None,
        }
    }

    /// Checks record-level invariants.
    ///
    /// Catalog-level invariants (unique ids, known classes) are enforced by
    /// the repository that owns the collection.
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.id.trim().is_empty() {
            return Err(ActivityValidationError::EmptyId);
        }
        if self.end_date < self.start_date {
            return Err(ActivityValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns whether the activity spans more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::{Activity, ActivityStatus, ActivityType, ActivityValidationError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn type_labels_round_trip() {
        for kind in ActivityType::ALL {
            assert_eq!(ActivityType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ActivityType::from_label("field trip"), None);
    }

    #[test]
    fn status_labels_round_trip() {
        for status in ActivityStatus::ALL {
            assert_eq!(ActivityStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn validate_rejects_blank_id() {
        let activity = Activity::new("  ", "x", "Grade 6A", ActivityType::Arts, date(2024, 4, 1));
        assert_eq!(activity.validate(), Err(ActivityValidationError::EmptyId));
    }

    #[test]
    fn multi_day_detection_uses_calendar_dates() {
        let mut activity =
            Activity::new("ACT-1", "camp", "Grade 7B", ActivityType::Academics, date(2024, 4, 27));
        assert!(!activity.is_multi_day());
        activity.end_date = date(2024, 4, 28);
        assert!(activity.is_multi_day());
        assert!(activity.validate().is_ok());
    }
}
