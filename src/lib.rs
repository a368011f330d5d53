//! Configuration front-end for a G-code analysis tool.
//!
//! Turns command-line flags plus two optional JSON side-files (a printer
//! profile and a list of coordinates to ignore) into a single validated
//! [`Options`] object for the analysis engine.
//!
//! This library provides:
//! - Partially-specified coordinates (per-axis "unset" vs. explicit zero)
//! - Printer-profile resolution (effective feedrate, extruder offsets)
//! - Ignore-list resolution
//! - Flag parsing, defaulting and merging into `Options`

pub mod coordinate;
pub mod error;
pub mod ignore;
mod json;
pub mod options;
pub mod profile;

// Re-exports for clean public API
pub use coordinate::Coordinate;
pub use error::ConfigError;
pub use ignore::load_ignore_list;
pub use options::{Args, DEFAULT_FEEDRATE, Options, OutputFormat};
pub use profile::Profile;
