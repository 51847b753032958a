//! Loading registry records from JSON fixture files.
//!
//! Fixtures hold the same JSON arrays the list endpoints deliver, so the
//! rest of the workspace can operate on realistic data without a network.
//! Every record is validated after deserialization; a single bad entry
//! fails the whole load with its record id in the error.

use crate::error::{RegistryError, Result};
use crate::types::{HomelessPerson, MissingPerson};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| RegistryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Load and validate a JSON array of missing-person records
pub fn load_missing(path: &Path) -> Result<Vec<MissingPerson>> {
    let reader = open(path)?;
    let records: Vec<MissingPerson> =
        serde_json::from_reader(reader).map_err(|source| RegistryError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let today = chrono::Utc::now().date_naive();
    for record in &records {
        record.validate(today)?;
    }
    Ok(records)
}

/// Load and validate a JSON array of homeless-person records
pub fn load_homeless(path: &Path) -> Result<Vec<HomelessPerson>> {
    let reader = open(path)?;
    let records: Vec<HomelessPerson> =
        serde_json::from_reader(reader).map_err(|source| RegistryError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let today = chrono::Utc::now().date_naive();
    for record in &records {
        record.validate(today)?;
    }
    Ok(records)
}
