//! The filter state store.
//!
//! [`SearchCriteria`] holds the current value of every filter dimension:
//! one free-text query, five categorical facets and two age bounds. Every
//! field is a string whose empty value means "unconstrained", matching the
//! search controls that feed it (text inputs and select chips both clear
//! to the empty string).

use std::fmt;

/// Names of the individual filter fields.
///
/// Used to address one field of [`SearchCriteria`] without exposing its
/// representation to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Query,
    Gender,
    Eyes,
    Hair,
    Skin,
    Status,
    AgeMin,
    AgeMax,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::Query,
        FilterKey::Gender,
        FilterKey::Eyes,
        FilterKey::Hair,
        FilterKey::Skin,
        FilterKey::Status,
        FilterKey::AgeMin,
        FilterKey::AgeMax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Query => "query",
            FilterKey::Gender => "gender",
            FilterKey::Eyes => "eyes",
            FilterKey::Hair => "hair",
            FilterKey::Skin => "skin",
            FilterKey::Status => "status",
            FilterKey::AgeMin => "age_min",
            FilterKey::AgeMax => "age_max",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every filter dimension.
///
/// The default value is the reset state: all eight fields empty at once.
/// Facet fields hold wire values from the registry's closed enumerations;
/// `set` does not validate them — the controls that call it only offer
/// valid options, and an off-enumeration value simply matches no record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: String,
    pub gender: String,
    pub eyes: String,
    pub hair: String,
    pub skin: String,
    pub status: String,
    pub age_min: String,
    pub age_max: String,
}

impl SearchCriteria {
    /// The reset state: every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single field, leaving all others unchanged
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        *self.field_mut(key) = value.into();
    }

    /// Current value of a single field
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Query => &self.query,
            FilterKey::Gender => &self.gender,
            FilterKey::Eyes => &self.eyes,
            FilterKey::Hair => &self.hair,
            FilterKey::Skin => &self.skin,
            FilterKey::Status => &self.status,
            FilterKey::AgeMin => &self.age_min,
            FilterKey::AgeMax => &self.age_max,
        }
    }

    /// Restore every field to empty in one update
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// How many fields currently differ from their empty default.
    ///
    /// Display-only: drives the filter badge and the "clear filters"
    /// affordance, never the filtering itself.
    pub fn active_count(&self) -> usize {
        FilterKey::ALL
            .iter()
            .filter(|key| !self.get(**key).is_empty())
            .count()
    }

    /// Whether no filter dimension is active
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    fn field_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Query => &mut self.query,
            FilterKey::Gender => &mut self.gender,
            FilterKey::Eyes => &mut self.eyes,
            FilterKey::Hair => &mut self.hair,
            FilterKey::Skin => &mut self.skin,
            FilterKey::Status => &mut self.status,
            FilterKey::AgeMin => &mut self.age_min,
            FilterKey::AgeMax => &mut self.age_max,
        }
    }
}
