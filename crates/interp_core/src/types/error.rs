//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from sample validation, bracket lookup and
//!   interpolation policies

use thiserror::Error;

/// Interpolation errors.
///
/// Provides structured error handling for interpolation operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InsufficientData`: Fewer than two sample points
/// - `InvalidInput`: Mismatched lengths or non-finite coordinates
/// - `DegenerateBracket`: Bracket points share an x value the query does not hit
/// - `OutOfBounds`: Query outside the sampled domain when extrapolation is disabled
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(err.is_invalid_input());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Both bracket points share an x value different from the query.
    #[error("Degenerate bracket: query {x} lies beside duplicate sample x = {bracket_x}")]
    DegenerateBracket {
        /// The query point
        x: f64,
        /// The x value shared by both bracket points
        bracket_x: f64,
    },

    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },
}

impl InterpolationError {
    /// Returns `true` for errors caused by malformed sample input
    /// (`InsufficientData` and `InvalidInput`).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            InterpolationError::InsufficientData { .. } | InterpolationError::InvalidInput(_)
        )
    }
}
