//! Search core for the registry's list pages.
//!
//! This crate provides:
//! - SearchCriteria, the filter state store (query, facets, age bounds)
//! - The predicate evaluator deciding inclusion per record
//! - An order-preserving projection of a record collection
//! - SearchSession, tying criteria to a page's searchable fields
//!
//! ## Architecture
//! A list page fetches records elsewhere and hands the in-memory
//! collection to this crate:
//! 1. The page owns a SearchSession created with its searchable fields
//! 2. Search controls mutate the criteria field by field
//! 3. Every read recomputes the projection against the current inputs
//!
//! All of it is synchronous and total: there is no caching, no I/O and
//! no failure mode. A criteria combination with zero matches is a valid
//! empty projection, not an error.
//!
//! ## Example Usage
//! ```ignore
//! use search::{FilterKey, SearchSession, MISSING_SEARCH_FIELDS};
//!
//! let mut session = SearchSession::new(&MISSING_SEARCH_FIELDS);
//! session.set(FilterKey::Query, "ana");
//! session.set(FilterKey::Status, "disappeared");
//!
//! let visible = session.filtered(&records);
//! println!("{} of {} records match", visible.len(), records.len());
//! ```

pub mod criteria;
pub mod evaluator;
pub mod projection;
pub mod record;
pub mod session;

// Re-export main types
pub use criteria::{FilterKey, SearchCriteria};
pub use evaluator::matches;
pub use projection::project;
pub use record::{Facet, Filterable, HOMELESS_SEARCH_FIELDS, MISSING_SEARCH_FIELDS};
pub use session::SearchSession;
