//! Edge-case policies for linear interpolation.
//!
//! Two situations have no single obvious answer:
//!
//! - The bracket chosen by [`locate`](super::locate) holds two points with the
//!   same x, and the query is not that x. There is no line through the
//!   bracket. [`DegeneratePolicy`] decides what happens.
//! - The query lies outside the sampled range. [`ExtrapolationMode`] decides
//!   whether the nearest bracket is extended or the query is rejected.

use crate::types::InterpolationError;
use std::fmt;
use std::str::FromStr;

/// Outcome for a duplicate-x bracket that the query does not hit.
///
/// A query equal to the duplicated x always yields the smaller of the two
/// y values, independent of this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DegeneratePolicy {
    /// Fail with [`InterpolationError::DegenerateBracket`].
    #[default]
    Reject,
    /// Return zero.
    Zero,
    /// Return the larger of the two y values.
    Max,
}

impl DegeneratePolicy {
    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DegeneratePolicy::Reject => "reject",
            DegeneratePolicy::Zero => "zero",
            DegeneratePolicy::Max => "max",
        }
    }
}

impl FromStr for DegeneratePolicy {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "error" => Ok(DegeneratePolicy::Reject),
            "zero" | "sentinel" => Ok(DegeneratePolicy::Zero),
            "max" => Ok(DegeneratePolicy::Max),
            other => Err(InterpolationError::InvalidInput(format!(
                "unknown degenerate policy '{}': expected reject, zero or max",
                other
            ))),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treatment of queries outside `[x_min, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExtrapolationMode {
    /// Extend the line through the nearest bracket.
    #[default]
    Linear,
    /// Fail with [`InterpolationError::OutOfBounds`].
    Error,
}

impl ExtrapolationMode {
    /// Lowercase name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtrapolationMode::Linear => "linear",
            ExtrapolationMode::Error => "error",
        }
    }
}

impl FromStr for ExtrapolationMode {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "extrapolate" => Ok(ExtrapolationMode::Linear),
            "error" | "bounded" => Ok(ExtrapolationMode::Error),
            other => Err(InterpolationError::InvalidInput(format!(
                "unknown extrapolation mode '{}': expected linear or error",
                other
            ))),
        }
    }
}

impl fmt::Display for ExtrapolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy bundle applied by [`LinearInterpolator`](super::LinearInterpolator)
/// and [`interpolate_with`](super::interpolate_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InterpolationOptions {
    /// Duplicate-x bracket handling
    pub degenerate: DegeneratePolicy,
    /// Out-of-range query handling
    pub extrapolation: ExtrapolationMode,
}

impl InterpolationOptions {
    /// Options with the given degenerate policy and linear extrapolation.
    pub fn with_degenerate(degenerate: DegeneratePolicy) -> Self {
        Self {
            degenerate,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = InterpolationOptions::default();
        assert_eq!(opts.degenerate, DegeneratePolicy::Reject);
        assert_eq!(opts.extrapolation, ExtrapolationMode::Linear);
    }

    #[test]
    fn test_degenerate_policy_parsing() {
        assert_eq!(
            DegeneratePolicy::from_str("reject").unwrap(),
            DegeneratePolicy::Reject
        );
        assert_eq!(
            DegeneratePolicy::from_str("ZERO").unwrap(),
            DegeneratePolicy::Zero
        );
        assert_eq!(
            DegeneratePolicy::from_str(" Max ").unwrap(),
            DegeneratePolicy::Max
        );
        assert_eq!(
            DegeneratePolicy::from_str("sentinel").unwrap(),
            DegeneratePolicy::Zero
        );

        let err = DegeneratePolicy::from_str("min").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("unknown degenerate policy"));
    }

    #[test]
    fn test_extrapolation_mode_parsing() {
        assert_eq!(
            ExtrapolationMode::from_str("linear").unwrap(),
            ExtrapolationMode::Linear
        );
        assert_eq!(
            ExtrapolationMode::from_str("Bounded").unwrap(),
            ExtrapolationMode::Error
        );
        assert!(ExtrapolationMode::from_str("cubic").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for policy in [
            DegeneratePolicy::Reject,
            DegeneratePolicy::Zero,
            DegeneratePolicy::Max,
        ] {
            assert_eq!(DegeneratePolicy::from_str(&policy.to_string()).unwrap(), policy);
        }
        for mode in [ExtrapolationMode::Linear, ExtrapolationMode::Error] {
            assert_eq!(ExtrapolationMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_with_degenerate() {
        let opts = InterpolationOptions::with_degenerate(DegeneratePolicy::Max);
        assert_eq!(opts.degenerate, DegeneratePolicy::Max);
        assert_eq!(opts.extrapolation, ExtrapolationMode::Linear);
    }
}
