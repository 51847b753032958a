//! # Registry Crate
//!
//! Domain model for the missing-persons/homeless registry.
//!
//! ## Main Components
//!
//! - **attributes**: Closed physical-attribute enumerations (gender, eye,
//!   hair and skin color, case status) with wire values and display labels
//! - **types**: The `MissingPerson` and `HomelessPerson` record types
//! - **loader**: Parse JSON fixture files into validated records
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use registry::{load_missing, CaseStatus};
//! use std::path::Path;
//!
//! let records = load_missing(Path::new("fixtures/missing.json"))?;
//!
//! let open_cases = records
//!     .iter()
//!     .filter(|p| p.status == CaseStatus::Disappeared)
//!     .count();
//!
//! println!("{} of {} cases still open", open_cases, records.len());
//! ```

// Public modules
pub mod attributes;
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use attributes::{CaseStatus, EyeColor, Gender, HairColor, Lang, SkinColor};
pub use error::{RegistryError, Result};
pub use loader::{load_homeless, load_missing};
pub use types::{GeoPoint, HomelessPerson, MissingPerson};
