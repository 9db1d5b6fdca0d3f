//! Filter stage: class, type and free-text narrowing.
//!
//! # Invariants
//! - Output preserves input order.
//! - Predicates are independent conjunctions; stage order never changes the
//!   result set.

use crate::dashboard::query::{ClassSelector, DashboardQuery, TypeSelector};
use crate::model::activity::Activity;

/// Narrows `activities` to the records matching every active selector.
pub fn filter_activities<'a>(activities: &'a [Activity], query: &DashboardQuery) -> Vec<&'a Activity> {
    let needle = query.search_needle();

    activities
        .iter()
        .filter(|activity| matches_class(activity, &query.class))
        .filter(|activity| matches_type(activity, query.kind))
        .filter(|activity| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(activity, needle))
        })
        .collect()
}

fn matches_class(activity: &Activity, selector: &ClassSelector) -> bool {
    match selector {
        ClassSelector::All => true,
        ClassSelector::Class(name) => activity.class_name == *name,
    }
}

fn matches_type(activity: &Activity, selector: TypeSelector) -> bool {
    match selector {
        TypeSelector::All => true,
        TypeSelector::Type(kind) => activity.kind == kind,
    }
}

/// `needle` must already be trimmed and lowercased.
fn matches_search(activity: &Activity, needle: &str) -> bool {
    [&activity.title, &activity.description, &activity.advisor]
        .into_iter()
        .chain(activity.tags.iter())
        .any(|field| field.to_lowercase().contains(needle))
}
