//! Error types for the registry crate.
//!
//! Errors only exist at the boundary: reading and validating fixture
//! files. Once records are in memory, the rest of the workspace operates
//! on them without failure modes.

use thiserror::Error;

/// Errors that can occur while loading and validating registry records
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Fixture file could not be read
    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixture contents are not valid JSON for the expected record shape
    #[error("Invalid JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A field held a value outside its closed enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// A record failed domain validation
    ///
    /// This variant stores the record id so the offending entry in a
    /// fixture can be located.
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RegistryError>;
