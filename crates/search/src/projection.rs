//! Order-preserving projection of a record collection through the
//! evaluator.
//!
//! A projection is a pure function of its inputs: a fresh sequence of
//! references to every accepted record, in the input's relative order.
//! Nothing is cached — callers recompute whenever the collection or the
//! criteria change.

use crate::criteria::SearchCriteria;
use crate::evaluator::matches;
use crate::record::Filterable;

/// Project the subset of `records` satisfying `criteria`.
///
/// The input is never mutated; the output borrows from it and preserves
/// its order.
pub fn project<'a, R: Filterable>(
    records: &'a [R],
    criteria: &SearchCriteria,
    search_fields: &[&str],
) -> Vec<&'a R> {
    let projected: Vec<&R> = records
        .iter()
        .filter(|record| matches(*record, criteria, search_fields))
        .collect();

    tracing::debug!(
        "Projection applied: {} active filters ({} records in, {} out)",
        criteria.active_count(),
        records.len(),
        projected.len()
    );

    projected
}
