//! Command-line configuration assembly.
//!
//! Handles:
//! - Command-line argument parsing
//! - Defaulting and merging of the profile and ignore-list inputs
//! - Output-format validation

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::ignore::load_ignore_list;
use crate::profile::Profile;

/// Fallback feedrate when the profile gives no axis speed.
pub const DEFAULT_FEEDRATE: f64 = 2000.0;

/// Command-line arguments for the G-code analyzer.
///
/// Help and version flags are declared explicitly so that `-?` and `-v`
/// work alongside clap's long forms. Every value flag overrides itself,
/// so a repeated flag keeps its last occurrence.
#[derive(Debug, Parser)]
#[command(name = "gcode-analyze")]
#[command(about = "Analyze G-code files")]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Configuration file with profile settings
    #[arg(short = 'p', long, value_name = "PATH", overrides_with = "profile")]
    pub profile: Option<PathBuf>,

    /// GCode file to process
    #[arg(short = 'f', long, value_name = "PATH", overrides_with = "file")]
    pub file: Option<PathBuf>,

    /// JSON file containing an array of coordinates to ignore
    #[arg(short = 'i', long, value_name = "PATH", overrides_with = "ignore")]
    pub ignore: Option<PathBuf>,

    /// Output format (JSON, XML)
    #[arg(short = 'o', long, value_name = "FORMAT", overrides_with = "output")]
    pub output: Option<String>,

    /// This help message
    #[arg(short = 'h', short_alias = '?', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Serialization format for the analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(OutputFormat::Json),
            "XML" => Ok(OutputFormat::Xml),
            other => Err(ConfigError::Validation(format!(
                "incorrect output format {other}"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("JSON"),
            OutputFormat::Xml => f.write_str("XML"),
        }
    }
}

/// The fully resolved configuration handed to the analysis engine.
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    /// G-code file to analyze; existence is checked by the engine.
    pub filename: Option<PathBuf>,
    /// Output serialization format.
    pub output: OutputFormat,
    /// Effective feedrate; [`DEFAULT_FEEDRATE`] unless a profile set it.
    pub feedrate: f64,
    /// Whether `feedrate` came from a profile axis speed.
    pub feedrate_set: bool,
    /// Extruder offsets in profile order, at most two.
    pub offsets: Vec<Coordinate>,
    /// Coordinates the analyzer should exclude.
    pub ignore: Vec<Coordinate>,
    /// The retained profile document, if one was loaded.
    pub profile: Option<Value>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            filename: None,
            output: OutputFormat::default(),
            feedrate: DEFAULT_FEEDRATE,
            feedrate_set: false,
            offsets: Vec::new(),
            ignore: Vec::new(),
            profile: None,
        }
    }
}

impl Options {
    /// Parse the process arguments and resolve the configuration.
    ///
    /// Help, version and malformed invocations are handled by clap
    /// before resolution starts.
    pub fn from_args_and_env() -> Result<Self, ConfigError> {
        Self::resolve(Args::parse())
    }

    /// Resolve the configuration from already-parsed arguments
    /// (useful for testing).
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let mut options = Options::default();

        options.filename = args.file;
        if let Some(format) = args.output.as_deref() {
            options.output = format.parse()?;
        }

        if let Some(path) = &args.profile {
            let profile = Profile::load(path)?;
            if let Some(feedrate) = profile.feedrate {
                options.feedrate = feedrate;
                options.feedrate_set = true;
            }
            options.offsets = profile.offsets;
            options.profile = Some(profile.document);
        }

        if let Some(path) = &args.ignore {
            options.ignore = load_ignore_list(path)?;
        }

        debug!(
            "resolved options: output {}, feedrate {}{}, {} offset(s), {} ignore(s)",
            options.output,
            options.feedrate,
            if options.feedrate_set { "" } else { " (default)" },
            options.offsets.len(),
            options.ignore.len()
        );

        Ok(options)
    }
}
