//! Ties the criteria store to a nominated set of searchable fields.
//!
//! A [`SearchSession`] is what a list page owns: it is created when the
//! page mounts (with the page's searchable field list), mutated by the
//! search controls, and dropped when the page unmounts. Reads recompute
//! the projection on every call — the operation is cheap and side-effect
//! free, so there is no cache to invalidate.

use crate::criteria::{FilterKey, SearchCriteria};
use crate::projection::project;
use crate::record::Filterable;

/// One list page's search state: criteria plus the nominated text fields.
#[derive(Debug, Clone)]
pub struct SearchSession {
    criteria: SearchCriteria,
    search_fields: Vec<String>,
}

impl SearchSession {
    /// Create a session with empty criteria over the given searchable
    /// text fields.
    pub fn new(search_fields: &[&str]) -> Self {
        Self {
            criteria: SearchCriteria::new(),
            search_fields: search_fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set one filter field
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        self.criteria.set(key, value);
    }

    /// Clear every filter field
    pub fn reset(&mut self) {
        self.criteria.reset();
    }

    /// Number of active filter dimensions, for the UI badge
    pub fn active_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Read access to the underlying criteria
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// The visible subset of `records` under the current criteria,
    /// recomputed on every call.
    pub fn filtered<'a, R: Filterable>(&self, records: &'a [R]) -> Vec<&'a R> {
        let fields: Vec<&str> = self.search_fields.iter().map(String::as_str).collect();
        project(records, &self.criteria, &fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Facet;

    struct TestRecord {
        name: &'static str,
        gender: &'static str,
        age: u32,
    }

    impl Filterable for TestRecord {
        fn text_field(&self, name: &str) -> Option<&str> {
            (name == "name").then_some(self.name)
        }

        fn facet(&self, facet: Facet) -> Option<&str> {
            matches!(facet, Facet::Gender).then_some(self.gender)
        }

        fn age(&self) -> Option<u32> {
            Some(self.age)
        }
    }

    fn records() -> Vec<TestRecord> {
        vec![
            TestRecord { name: "Ana", gender: "female", age: 25 },
            TestRecord { name: "Bruno", gender: "male", age: 40 },
        ]
    }

    #[test]
    fn test_mutation_is_visible_on_next_read() {
        let records = records();
        let mut session = SearchSession::new(&["name"]);

        assert_eq!(session.filtered(&records).len(), 2);

        session.set(FilterKey::Gender, "male");
        let visible = session.filtered(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bruno");
    }

    #[test]
    fn test_reset_returns_to_identity_regardless_of_prior_mutations() {
        let records = records();
        let mut session = SearchSession::new(&["name"]);

        session.set(FilterKey::Query, "ana");
        session.set(FilterKey::Gender, "female");
        session.set(FilterKey::AgeMin, "10");
        assert_eq!(session.active_count(), 3);

        session.reset();
        assert_eq!(session.active_count(), 0);
        assert_eq!(session.filtered(&records).len(), records.len());
    }

    #[test]
    fn test_source_collection_replacement_is_reflected() {
        let mut session = SearchSession::new(&["name"]);
        session.set(FilterKey::Query, "an");

        let first_page = records();
        assert_eq!(session.filtered(&first_page).len(), 1);

        // The page appends more fetched records; the same session
        // projects the grown collection.
        let mut grown = records();
        grown.push(TestRecord { name: "Mariana", gender: "female", age: 61 });
        let visible = session.filtered(&grown);
        let names: Vec<&str> = visible.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ana", "Mariana"]);
    }
}
