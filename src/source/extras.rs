//! Locally supplied extra ranges.

use crate::error::{Result, RoutesError};
use std::path::Path;

/// Read `path` as a JSON array of CIDR strings.
///
/// Entries are returned unvalidated and in file order. A single non-string
/// element fails the whole file.
pub fn load_extras(path: &Path) -> Result<Vec<String>> {
    let json = std::fs::read_to_string(path).map_err(|source| RoutesError::ExtrasRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let extras: Vec<String> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            RoutesError::ExtrasDecode {
                path: path.to_path_buf(),
                json_path: e.path().to_string(),
                source: e.into_inner(),
            }
        })?;
    deserializer.end().map_err(|source| RoutesError::ExtrasDecode {
        path: path.to_path_buf(),
        json_path: ".".to_string(),
        source,
    })?;

    log::info!("Loaded {} extra prefixes from {}", extras.len(), path.display());
    Ok(extras)
}

/// [`load_extras`], degrading any failure to an empty list with a warning.
pub fn extras_or_empty(path: &Path) -> Vec<String> {
    match load_extras(path) {
        Ok(extras) => extras,
        Err(e) => {
            log::warn!("{e}; continuing without extra prefixes");
            Vec::new()
        }
    }
}
