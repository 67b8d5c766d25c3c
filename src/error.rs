//! Error type for the boundary layer.
//!
//! Pixel kernels are total functions and never fail. Errors only arise where a
//! caller hands in a buffer, a shape, a filter name, or a settings document
//! that breaks a precondition.

use crate::filters::core::CHANNELS;

/// Errors reported by buffer validation, dispatch, and settings parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("buffer length {len} is not a multiple of {}", CHANNELS)]
    InvalidBufferLength { len: usize },

    #[error("declared length {len} exceeds the {available} bytes available")]
    OutOfBounds { len: usize, available: usize },

    #[error("negative buffer length {0}")]
    NegativeLength(i64),

    #[error("null buffer pointer")]
    NullPointer,

    #[error("expected {} channels (RGBA), got {channels}", CHANNELS)]
    InvalidShape { channels: usize },

    #[error("image array is not contiguous in standard layout")]
    NotContiguous,

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("filter {filter} expects {expected} value(s), got {got}")]
    MissingParameter {
        filter: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid filter settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::InvalidSettings(err.to_string())
    }
}
