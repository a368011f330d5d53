//! Printer profile resolution.
//!
//! A profile is a JSON document describing the printer's motion system,
//! following the OctoPrint printer-profile layout. Only two pieces are
//! derived here: an effective feedrate from the per-axis speeds, and up
//! to two extruder offsets. The rest of the document is retained so that
//! later analysis stages can consult fields not extracted at load time.

use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::json;

/// At most two extruders are supported, so at most two offsets.
const MAX_OFFSETS: usize = 2;

/// A loaded printer profile with its derived fields.
#[derive(Debug, Clone)]
pub struct Profile {
    /// The full parsed document, kept for the process lifetime.
    pub document: Value,
    /// Effective feedrate, if at least one axis speed was present.
    pub feedrate: Option<f64>,
    /// Extruder offsets in profile order, `offsets.len() <= 2`.
    pub offsets: Vec<Coordinate>,
}

impl Profile {
    /// Load and resolve a printer profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = json::load_document(path)?;
        let feedrate = resolve_feedrate(&document);
        let offsets = resolve_offsets(&document);

        debug!(
            "loaded profile {}: feedrate {:?}, {} extruder offset(s)",
            path.display(),
            feedrate,
            offsets.len()
        );

        Ok(Profile {
            document,
            feedrate,
            offsets,
        })
    }
}

/// Numeric `axes.<axis>.speed` leaf, if present.
fn axis_speed(document: &Value, axis: &str) -> Option<f64> {
    document.get("axes")?.get(axis)?.get("speed")?.as_f64()
}

/// Reduce the x and y axis speeds to one effective feedrate.
///
/// A multi-axis move cannot exceed the slowest contributing axis, so
/// when both speeds are present the minimum wins. A profile without any
/// axis speed yields `None` and the assembler's default applies.
fn resolve_feedrate(document: &Value) -> Option<f64> {
    match (axis_speed(document, "x"), axis_speed(document, "y")) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// Read `extruder.offsets` as `[x, y]` tuples, z fixed at 0.
///
/// A missing or non-array `offsets` key means a single-extruder profile,
/// not an error. An entry missing either tuple component stops offset
/// consumption at the entries parsed so far.
fn resolve_offsets(document: &Value) -> Vec<Coordinate> {
    let mut offsets = Vec::new();

    let entries = document
        .get("extruder")
        .and_then(|extruder| extruder.get("offsets"))
        .and_then(Value::as_array);
    let Some(entries) = entries else {
        return offsets;
    };

    for entry in entries.iter().take(MAX_OFFSETS) {
        match (
            entry.get(0).and_then(Value::as_f64),
            entry.get(1).and_then(Value::as_f64),
        ) {
            (Some(x), Some(y)) => offsets.push(Coordinate::new(x, y, 0.0)),
            _ => break,
        }
    }

    offsets
}
