//! Error types for suggest_core

use suggest_platform::PlatformError;
use thiserror::Error;

/// Errors raised while configuring or inspecting an autocomplete
///
/// Normal interaction never produces an error; these come from building
/// the widget, loading configuration, or explicit measurement/debug calls.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// No display-value resolver was supplied to the builder
    #[error("no display value resolver configured: call `display_value` before `build`")]
    MissingDisplayValue,

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Debug snapshots could not be serialized
    #[error("Failed to serialize debug snapshots: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Host capability failure (measurement of a detached input, ...)
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for suggest_core operations
pub type Result<T> = std::result::Result<T, AutocompleteError>;
