//! Selector state for the dashboard pipeline.
//!
//! # Responsibility
//! - Model the four independent selectors as one plain value.
//! - Map raw UI selector strings onto typed selectors without failing.
//!
//! # Invariants
//! - Unknown or blank selector input means "no filter applied".
//! - Any combination of selectors is valid at any time.

use crate::model::activity::ActivityType;
use serde::{Deserialize, Serialize};

/// Sentinel label for the class selector meaning "no class filter".
pub const ALL_CLASSES_LABEL: &str = "All Classes";
/// Sentinel label for the type selector meaning "no type filter".
pub const ALL_TYPES_LABEL: &str = "All Types";

/// Class axis of the filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassSelector {
    #[default]
    All,
    Class(String),
}

impl ClassSelector {
    /// Parses a raw selector value against the catalog's class names.
    pub fn parse(value: &str, known_classes: &[String]) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_CLASSES_LABEL {
            return Self::All;
        }
        match known_classes.iter().find(|name| name.as_str() == trimmed) {
            Some(name) => Self::Class(name.clone()),
            None => Self::All,
        }
    }

    /// Display label used by the selector widget.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CLASSES_LABEL,
            Self::Class(name) => name.as_str(),
        }
    }
}

/// Type axis of the filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSelector {
    #[default]
    All,
    Type(ActivityType),
}

impl TypeSelector {
    pub fn parse(value: &str) -> Self {
        ActivityType::from_label(value.trim())
            .map(Self::Type)
            .unwrap_or(Self::All)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_TYPES_LABEL,
            Self::Type(kind) => kind.label(),
        }
    }
}

/// Ordering applied to filtered rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    StartDate,
    ClassName,
    #[serde(rename = "type")]
    Type,
}

impl SortKey {
    /// Sort options in selector display order.
    pub const ALL: [SortKey; 3] = [SortKey::StartDate, SortKey::ClassName, SortKey::Type];

    /// Stable option value (`startDate|className|type`).
    pub fn value(self) -> &'static str {
        match self {
            Self::StartDate => "startDate",
            Self::ClassName => "className",
            Self::Type => "type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StartDate => "By Start Date",
            Self::ClassName => "By Class",
            Self::Type => "By Activity Type",
        }
    }

    /// Parses an option value; unknown input falls back to the default.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == value.trim())
            .unwrap_or_default()
    }
}

/// Complete selector state driving one dashboard recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub class: ClassSelector,
    pub kind: TypeSelector,
    /// Raw search text; trimmed and case-folded at filter time.
    pub search: String,
    pub sort: SortKey,
}

impl DashboardQuery {
    /// Builds a query from raw UI selector strings.
    pub fn from_selectors(
        class: &str,
        kind: &str,
        search: &str,
        sort: &str,
        known_classes: &[String],
    ) -> Self {
        Self {
            class: ClassSelector::parse(class, known_classes),
            kind: TypeSelector::parse(kind),
            search: search.to_string(),
            sort: SortKey::parse(sort),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class = ClassSelector::Class(class_name.into());
        self
    }

    pub fn with_type(mut self, kind: ActivityType) -> Self {
        self.kind = TypeSelector::Type(kind);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Trimmed, lowercased search needle; `None` when search is inactive.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Returns whether no narrowing selector is active.
    ///
    /// Sort key is not a filter and is ignored here.
    pub fn is_unfiltered(&self) -> bool {
        self.class == ClassSelector::All
            && self.kind == TypeSelector::All
            && self.search_needle().is_none()
    }
}
