//! Error types for the fallible edges of the crate.
//!
//! Drag operations themselves never fail; errors only surface while
//! loading configuration or binding to host elements. `initialize` turns
//! a missing element into an inert manager instead of returning an error.

use thiserror::Error;

/// Errors that can occur while configuring or binding a manager
#[derive(Error, Debug)]
pub enum AreaError {
    /// A required host element could not be found
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A configuration value is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible area operations
pub type AreaResult<T> = Result<T, AreaError>;
