//! Error types for selection and region construction

use thiserror::Error;

/// Errors raised when building ranges from raw offsets.
///
/// `remap` itself never fails; these only surface at construction time, when a
/// caller hands in offsets that could not come from a well-behaved widget.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The start offset lies after the end offset.
    #[error("Inverted range: start {start} is after end {end}")]
    Inverted { start: usize, end: usize },

    /// The range reaches past the end of the text it indexes.
    #[error("Range end {end} exceeds text length {len}")]
    OutOfBounds { end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RangeError>;
