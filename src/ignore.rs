//! Ignore-list resolution.
//!
//! The ignore file is a JSON array of coordinate objects. Each object
//! may give any subset of `x`, `y` and `z`; an omitted axis stays unset
//! on the resulting [`Coordinate`] so the analyzer can match it as a
//! wildcard.

use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::json;

/// Load the list of coordinates to exclude from analysis.
///
/// The top-level value must be a non-empty array: an empty ignore file
/// is taken as a malformed input rather than an intentional empty
/// exclusion set, and is rejected the same way as a non-array.
pub fn load_ignore_list(path: &Path) -> Result<Vec<Coordinate>, ConfigError> {
    let document = json::load_document(path)?;

    let entries = document.as_array().filter(|entries| !entries.is_empty());
    let Some(entries) = entries else {
        return Err(ConfigError::Schema {
            path: path.to_path_buf(),
            reason: "JSON file with coordinates to ignore must be a non-empty array".to_string(),
        });
    };

    let coordinates = entries.iter().map(coordinate_from_entry).collect();
    debug!(
        "loaded {} ignore coordinate(s) from {}",
        entries.len(),
        path.display()
    );
    Ok(coordinates)
}

fn coordinate_from_entry(entry: &Value) -> Coordinate {
    let mut coordinate = Coordinate::unset();
    coordinate.x = entry.get("x").and_then(Value::as_f64);
    coordinate.y = entry.get("y").and_then(Value::as_f64);
    coordinate.z = entry.get("z").and_then(Value::as_f64);
    coordinate
}
