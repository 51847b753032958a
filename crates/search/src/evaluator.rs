//! The predicate evaluator: one record against the current criteria.
//!
//! All active constraints are conjunctive — a record is included only when
//! it satisfies every one of them. The evaluator is total: malformed age
//! bounds and absent record fields degrade to "unconstrained" or
//! "non-matching", never to a panic or an error value.

use crate::criteria::SearchCriteria;
use crate::record::{Facet, Filterable};

/// Decide whether `record` satisfies every active constraint in `criteria`.
///
/// `search_fields` is the caller-nominated list of text fields eligible
/// for the free-text query.
pub fn matches<R: Filterable>(record: &R, criteria: &SearchCriteria, search_fields: &[&str]) -> bool {
    matches_query(record, &criteria.query, search_fields)
        && matches_facet(record, Facet::Gender, &criteria.gender)
        && matches_facet(record, Facet::Eyes, &criteria.eyes)
        && matches_facet(record, Facet::Hair, &criteria.hair)
        && matches_facet(record, Facet::Skin, &criteria.skin)
        && matches_facet(record, Facet::Status, &criteria.status)
        && within_age_bounds(record, &criteria.age_min, &criteria.age_max)
}

/// Case-insensitive substring match over the nominated text fields.
///
/// At least one field must contain the query. Fields the record does not
/// expose count as non-matching.
fn matches_query<R: Filterable>(record: &R, query: &str, search_fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    search_fields.iter().any(|field| {
        record
            .text_field(field)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

/// Exact, case-sensitive match on one categorical facet.
///
/// An empty criterion is unconstrained; a record without the facet fails
/// any non-empty criterion on it.
fn matches_facet<R: Filterable>(record: &R, facet: Facet, wanted: &str) -> bool {
    if wanted.is_empty() {
        return true;
    }
    record.facet(facet) == Some(wanted)
}

/// Inclusive age range check.
///
/// An unknown age reads as 0. A bound that fails to parse as an integer is
/// unconstrained — the permissive fallback the search controls rely on
/// while the user is still typing.
fn within_age_bounds<R: Filterable>(record: &R, age_min: &str, age_max: &str) -> bool {
    let age = record.age().unwrap_or(0);

    if let Some(min) = parse_bound(age_min) {
        if age < min {
            return false;
        }
    }
    if let Some(max) = parse_bound(age_max) {
        if age > max {
            return false;
        }
    }
    true
}

fn parse_bound(raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return None;
    }
    raw.trim().parse().ok()
}
