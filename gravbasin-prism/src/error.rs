//! Error types for building and evaluating prism models.

use gravbasin_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a forward model.
///
/// Numeric singularities in the kernel are not errors: an observation point
/// sitting exactly on a prism corner yields NaN or infinite values that flow
/// into the returned field unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForwardError {
    /// The depth profile has no entries, so no prism can be built.
    #[error("depth profile must contain at least one depth")]
    EmptyDepthProfile,

    /// A depth is negative or not a number.
    #[error("invalid depth at index {index}: {source}")]
    InvalidDepth {
        index: usize,
        #[source]
        source: ConstraintError,
    },

    /// The horizontal extent is empty, reversed, or non-finite.
    ///
    /// Both values are in meters.
    #[error("invalid basin boundaries: start={start} m must be finite and less than end={end} m")]
    InvalidBoundaries { start: f64, end: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
