//! Snapshot loader
//!
//! Reads the catalog the backend delivered (saved as JSON) into a
//! [`Snapshot`]. Either a full snapshot object or a bare array of colleges is
//! accepted.

use crate::core::models::{College, Snapshot};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a snapshot from JSON text
///
/// A document starting with `[` is read as a college array, anything else as
/// a snapshot object. Errors point at the offending line and column.
///
/// # Errors
/// Returns an error if the text is not a snapshot object or a college array
pub fn parse_snapshot(json: &str) -> Result<Snapshot, Box<dyn Error>> {
    let snapshot = if json.trim_start().starts_with('[') {
        let colleges: Vec<College> = serde_json::from_str(json)
            .map_err(|e| format!("Invalid college array: {e}"))?;
        Snapshot::from_colleges(colleges)
    } else {
        serde_json::from_str::<Snapshot>(json)
            .map_err(|e| format!("Invalid snapshot object: {e}"))?
    };

    crate::debug!(
        "Snapshot parsed: {} colleges, {} exams, {} blogs",
        snapshot.colleges.len(),
        snapshot.exams.len(),
        snapshot.blogs.len()
    );
    Ok(snapshot)
}

/// Load a snapshot from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, Box<dyn Error>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_snapshot(&content)
}
