//! Error types for autoplanner.

use thiserror::Error;

use crate::features::normalize::NormalizeError;

/// Top-level error for every fallible autoplanner operation.
///
/// The basic input parser never fails; everything downstream of it
/// (normalization, configuration, I/O, JSON) reports through this type.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure (reading input files, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An event failed normalization.
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// The caller passed empty text where an event description is required.
    #[error("no event text given")]
    EmptyInput,

    /// A command-line argument had an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
