//! Error types for the filter boundary.
//!
//! The per-pixel kernel never fails; these errors only surface where raw
//! buffers or user-supplied parameters enter the crate.

use thiserror::Error;

/// Error type for filter operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Buffer length or array shape does not match the stated dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Hue band name that is not one of red, green, blue, all.
    #[error("unknown hue band: {0:?}")]
    UnknownHueBand(String),
}

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
