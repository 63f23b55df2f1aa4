//! Build error types.

use thiserror::Error;

/// Result type for event building operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building an event.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A start or end value could not be parsed as a date.
    #[error("invalid date: {value:?}")]
    InvalidDate { value: String },
}
