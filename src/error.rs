//! Error types for configuration loading.
//!
//! Input handling itself never fails; only reading settings from disk can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for `InputSettings`
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Primary and secondary share one raw code, so secondary could never fire
    #[error("buttons.primary and buttons.secondary both use raw code {0}")]
    AmbiguousButtons(u16),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
