//! Partially-specified 3D coordinates.
//!
//! Profiles and ignore lists may give any subset of the three axes, and
//! an axis that is absent means something different from an axis that is
//! explicitly `0.0`. Each axis is therefore an independent `Option<f64>`
//! rather than a sentinel value.

use serde::Serialize;

/// A point with independently optional x, y and z components.
///
/// `None` for an axis means "not specified", which downstream matching
/// treats as a wildcard for that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Coordinate {
    /// A coordinate with all three axes specified.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Coordinate {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// A coordinate with no axis specified.
    pub fn unset() -> Self {
        Coordinate::default()
    }
}
