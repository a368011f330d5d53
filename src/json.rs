//! Shared JSON document loading for the profile and ignore resolvers.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ConfigError;

/// Read a file and parse it as a JSON document.
///
/// The file handle is released before this returns, on the error paths
/// included. Decoder failures carry the line number and the decoder's
/// message, without its trailing location suffix.
pub(crate) fn load_document(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|err| {
        let message = err.to_string();
        let message = message
            .split(" at line ")
            .next()
            .unwrap_or(&message)
            .to_string();
        ConfigError::Parse {
            path: path.to_path_buf(),
            line: err.line(),
            message,
        }
    })
}
