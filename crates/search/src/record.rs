//! The capability a record needs to participate in filtering.
//!
//! The evaluator never reaches into concrete record structs. A record type
//! opts in by implementing [`Filterable`]: a mapping from nominated field
//! names to searchable text, an accessor for each categorical facet, and
//! an age. Missing values are `None`, never errors — the evaluator treats
//! them as non-matching or unconstrained as appropriate.

use registry::{HomelessPerson, MissingPerson};

/// The five categorical filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Gender,
    Eyes,
    Hair,
    Skin,
    Status,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Gender,
        Facet::Eyes,
        Facet::Hair,
        Facet::Skin,
        Facet::Status,
    ];
}

/// Access to the filterable surface of a record.
///
/// ## Design Note
/// The caller nominates which text fields are searchable per list page;
/// `text_field` resolves those names. A name the record does not expose
/// returns `None` and simply never matches.
pub trait Filterable {
    /// Value of a named searchable text field, if the record has one
    fn text_field(&self, name: &str) -> Option<&str>;

    /// Wire value of a categorical facet, if the record has one
    fn facet(&self, facet: Facet) -> Option<&str>;

    /// Age in whole years, `None` when unknown
    fn age(&self) -> Option<u32>;
}

/// Searchable text fields a missing-person list page nominates
pub const MISSING_SEARCH_FIELDS: [&str; 4] = ["name", "nickname", "clothes", "event_report"];

/// Searchable text fields a homeless list page nominates
pub const HOMELESS_SEARCH_FIELDS: [&str; 2] = ["name", "nickname"];

impl Filterable for MissingPerson {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "nickname" => Some(&self.nickname),
            "clothes" => Some(&self.clothes),
            "event_report" => Some(&self.event_report),
            _ => None,
        }
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Gender => Some(self.gender.as_str()),
            Facet::Eyes => Some(self.eyes.as_str()),
            Facet::Hair => Some(self.hair.as_str()),
            Facet::Skin => Some(self.skin.as_str()),
            Facet::Status => Some(self.status.as_str()),
        }
    }

    fn age(&self) -> Option<u32> {
        MissingPerson::age(self)
    }
}

impl Filterable for HomelessPerson {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "nickname" => Some(&self.nickname),
            _ => None,
        }
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Gender => Some(self.gender.as_str()),
            Facet::Eyes => Some(self.eyes.as_str()),
            Facet::Hair => Some(self.hair.as_str()),
            Facet::Skin => Some(self.skin.as_str()),
            // Homeless registrations carry no case status
            Facet::Status => None,
        }
    }

    fn age(&self) -> Option<u32> {
        HomelessPerson::age(self)
    }
}
