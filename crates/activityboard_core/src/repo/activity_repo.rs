//! Activity repository contract and static catalog implementation.
//!
//! # Responsibility
//! - Provide stable read APIs over the activity collection and its
//!   enumerations (class names, activity types).
//! - Validate a catalog once, at construction time.
//!
//! # Invariants
//! - Ids are unique within one repository.
//! - Every `class_name` is drawn from the repository's class list.
//! - Read paths never mutate and never fail for the static implementation.

use crate::model::activity::{Activity, ActivityId, ActivityType, ActivityValidationError};
use crate::repo::seed;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog construction and reads.
#[derive(Debug)]
pub enum RepoError {
    Validation(ActivityValidationError),
    DuplicateId(ActivityId),
    UnknownClass {
        id: ActivityId,
        class_name: String,
    },
    InvalidCatalog(String),
    Decode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate activity id: {id}"),
            Self::UnknownClass { id, class_name } => {
                write!(f, "activity {id} references unknown class `{class_name}`")
            }
            Self::InvalidCatalog(message) => write!(f, "invalid activity catalog: {message}"),
            Self::Decode(err) => write!(f, "failed to decode activity catalog: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::DuplicateId(_) | Self::UnknownClass { .. } | Self::InvalidCatalog(_) => None,
        }
    }
}

impl From<ActivityValidationError> for RepoError {
    fn from(value: ActivityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Read-only data source for dashboard derivations.
///
/// A future persistent store only has to implement this trait; derivation
/// code never sees storage details.
pub trait ActivityRepository {
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    fn class_names(&self) -> RepoResult<Vec<String>>;
    fn activity_types(&self) -> RepoResult<Vec<ActivityType>>;
}

impl<R: ActivityRepository + ?Sized> ActivityRepository for &R {
    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        (**self).list_activities()
    }

    fn class_names(&self) -> RepoResult<Vec<String>> {
        (**self).class_names()
    }

    fn activity_types(&self) -> RepoResult<Vec<ActivityType>> {
        (**self).activity_types()
    }
}

/// Fixture document shape accepted by [`StaticActivityRepository::from_json`].
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    classes: Vec<String>,
    activities: Vec<Activity>,
}

/// Immutable in-memory activity catalog.
#[derive(Debug, Clone)]
pub struct StaticActivityRepository {
    class_names: Vec<String>,
    activities: Vec<Activity>,
}

impl StaticActivityRepository {
    /// Builds a catalog after validating every record against it.
    pub fn try_new(class_names: Vec<String>, activities: Vec<Activity>) -> RepoResult<Self> {
        let mut known_classes = HashSet::new();
        for class_name in &class_names {
            if class_name.trim().is_empty() {
                return Err(RepoError::InvalidCatalog(
                    "class name cannot be blank".to_string(),
                ));
            }
            if !known_classes.insert(class_name.as_str()) {
                return Err(RepoError::InvalidCatalog(format!(
                    "duplicate class name `{class_name}`"
                )));
            }
        }

        let mut seen_ids = HashSet::new();
        for activity in &activities {
            activity.validate()?;
            if !seen_ids.insert(activity.id.as_str()) {
                warn!("event=catalog_load module=repo status=error reason=duplicate_id");
                return Err(RepoError::DuplicateId(activity.id.clone()));
            }
            if !known_classes.contains(activity.class_name.as_str()) {
                warn!("event=catalog_load module=repo status=error reason=unknown_class");
                return Err(RepoError::UnknownClass {
                    id: activity.id.clone(),
                    class_name: activity.class_name.clone(),
                });
            }
        }

        debug!(
            "event=catalog_load module=repo status=ok classes={} activities={}",
            class_names.len(),
            activities.len()
        );

        Ok(Self {
            class_names,
            activities,
        })
    }

    /// Decodes a `{ "classes": [...], "activities": [...] }` fixture document.
    pub fn from_json(document: &str) -> RepoResult<Self> {
        let catalog: CatalogDocument = serde_json::from_str(document)?;
        Self::try_new(catalog.classes, catalog.activities)
    }

    /// Returns the built-in school catalog.
    pub fn seeded() -> Self {
        Self {
            class_names: seed::class_names(),
            activities: seed::activities(),
        }
    }

    /// Returns an empty catalog with no classes.
    pub fn empty() -> Self {
        Self {
            class_names: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// Borrowed view over the stored records.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

impl ActivityRepository for StaticActivityRepository {
    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn class_names(&self) -> RepoResult<Vec<String>> {
        Ok(self.class_names.clone())
    }

    fn activity_types(&self) -> RepoResult<Vec<ActivityType>> {
        Ok(ActivityType::ALL.to_vec())
    }
}
