//! Platform error types

use thiserror::Error;

/// Host capability errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The input element is not attached to a document/window yet
    #[error("Input element is not attached")]
    Detached,

    /// The element is attached but cannot be measured right now
    #[error("Element measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    /// Generic host error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
