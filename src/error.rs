//! Error types for configuration resolution.

use std::io;
use std::path::PathBuf;

/// An error that occurs while resolving the command-line configuration.
///
/// The resolvers never terminate the process themselves; every failure is
/// returned up to the entry point, which decides the exit status.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A profile or ignore file could not be opened or read.
    #[error("unable to open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A profile or ignore file was not valid JSON.
    #[error("parsing error in {}: on line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// The JSON parsed but did not have the expected shape.
    #[error("{}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },
    /// A flag value failed validation.
    #[error("{0}")]
    Validation(String),
}
