//! One-shot interpolation over unsorted samples.
//!
//! These functions build a fresh sorted sample set on every call, so no
//! ordering state survives between calls.

use super::policy::InterpolationOptions;
use super::{Interpolator, LinearInterpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Estimate y at `x` from `n` samples using default policies.
///
/// Equivalent to [`interpolate_with`] with [`InterpolationOptions::default`]:
/// out-of-range queries are extrapolated along the nearest bracket and a
/// duplicate-x bracket the query does not hit is rejected.
///
/// Only finite x-coordinates and queries are accepted: an infinite or NaN
/// query fails with `InterpolationError::InvalidInput` instead of
/// propagating `inf`/`NaN` through the slope. Non-finite y-values are kept.
///
/// # Arguments
///
/// * `n` - Declared number of samples; must equal both slice lengths
/// * `xs` - x-coordinates, any order
/// * `ys` - y-values paired with `xs`
/// * `x` - Query point
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::interpolate;
///
/// let xs: [f64; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
/// let ys = [10.0, 0.0, 15.0, 5.0, 0.0];
///
/// let y = interpolate(5, &xs, &ys, -0.3).unwrap();
/// assert!((y - 13.5).abs() < 1e-12);
///
/// assert!(interpolate(1, &xs[..1], &ys[..1], 0.0).is_err());
/// ```
pub fn interpolate<T: Float>(n: usize, xs: &[T], ys: &[T], x: T) -> Result<T, InterpolationError> {
    interpolate_with(n, xs, ys, x, InterpolationOptions::default())
}

/// Estimate y at `x` from `n` samples with explicit policies.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - `n < 2`
/// * `InterpolationError::InvalidInput` - `xs.len() != n`, `ys.len() != n`,
///   non-finite x-coordinate or query
/// * `InterpolationError::DegenerateBracket` / `OutOfBounds` - per `options`
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{interpolate_with, DegeneratePolicy, InterpolationOptions};
///
/// let opts = InterpolationOptions::with_degenerate(DegeneratePolicy::Max);
/// let y = interpolate_with(2, &[1.0, 1.0], &[3.0, 2.0], 5.0, opts).unwrap();
/// assert_eq!(y, 3.0);
/// ```
pub fn interpolate_with<T: Float>(
    n: usize,
    xs: &[T],
    ys: &[T],
    x: T,
    options: InterpolationOptions,
) -> Result<T, InterpolationError> {
    if n < 2 {
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }

    if xs.len() != n || ys.len() != n {
        return Err(InterpolationError::InvalidInput(format!(
            "expected {} samples: xs has {}, ys has {}",
            n,
            xs.len(),
            ys.len()
        )));
    }

    LinearInterpolator::new(xs, ys)?
        .with_options(options)
        .interpolate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interpolators::{DegeneratePolicy, ExtrapolationMode};
    use approx::assert_relative_eq;

    const XS: [f64; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
    const YS: [f64; 5] = [10.0, 0.0, 15.0, 5.0, 0.0];

    #[test]
    fn test_worked_scenario() {
        // Sorted: (-2,0) (-1,10) (0,15) (1,0) (2,5); bracket (-1,10)-(0,15)
        let y = interpolate(5, &XS, &YS, -0.3).unwrap();
        assert_relative_eq!(y, 13.5, epsilon = 1e-12);
    }

    #[test]
    fn test_boundary_scenario() {
        let y = interpolate(5, &XS, &YS, -5.0).unwrap();
        assert_relative_eq!(y, -30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_n_below_two_is_rejected() {
        for n in [0, 1] {
            match interpolate(n, &XS[..n], &YS[..n], 0.0).unwrap_err() {
                InterpolationError::InsufficientData { got, need } => {
                    assert_eq!(got, n);
                    assert_eq!(need, 2);
                }
                _ => panic!("Expected InsufficientData error"),
            }
        }
    }

    #[test]
    fn test_n_disagrees_with_xs() {
        let err = interpolate(4, &XS, &YS[..4], 0.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("xs has 5"));
    }

    #[test]
    fn test_n_disagrees_with_ys() {
        let err = interpolate(5, &XS, &YS[..4], 0.0).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(_)));
    }

    #[test]
    fn test_infinite_query_is_invalid_input() {
        let overflow = 1e308_f64 * 10.0;
        for x in [f64::INFINITY, f64::NEG_INFINITY, overflow, f64::NAN] {
            let err = interpolate(2, &[0.0, 1.0], &[0.0, 1.0], x).unwrap_err();
            assert!(err.is_invalid_input());
        }

        // Large but finite queries still extrapolate
        let y = interpolate(2, &[0.0, 1.0], &[0.0, 1.0], 1e300).unwrap();
        assert_relative_eq!(y, 1e300, max_relative = 1e-12);
    }

    #[test]
    fn test_repeated_calls_do_not_share_order() {
        let first = interpolate(5, &XS, &YS, 0.5).unwrap();

        let xs = [5.0, 4.0, 3.0, 2.0, 1.0];
        let ys = [50.0, 40.0, 30.0, 20.0, 10.0];
        let other = interpolate(5, &xs, &ys, 2.5).unwrap();

        let again = interpolate(5, &XS, &YS, 0.5).unwrap();
        assert_eq!(first, again);
        assert_relative_eq!(other, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_policies() {
        let xs = [1.0, 1.0];
        let ys = [3.0, 2.0];

        assert_eq!(interpolate(2, &xs, &ys, 1.0).unwrap(), 2.0);
        assert!(matches!(
            interpolate(2, &xs, &ys, 2.0),
            Err(InterpolationError::DegenerateBracket { .. })
        ));

        let zero = InterpolationOptions::with_degenerate(DegeneratePolicy::Zero);
        assert_eq!(interpolate_with(2, &xs, &ys, 2.0, zero).unwrap(), 0.0);

        let max = InterpolationOptions::with_degenerate(DegeneratePolicy::Max);
        assert_eq!(interpolate_with(2, &xs, &ys, 2.0, max).unwrap(), 3.0);
    }

    #[test]
    fn test_bounded_mode() {
        let opts = InterpolationOptions {
            extrapolation: ExtrapolationMode::Error,
            ..Default::default()
        };

        assert!(matches!(
            interpolate_with(5, &XS, &YS, -5.0, opts),
            Err(InterpolationError::OutOfBounds { .. })
        ));
        assert_relative_eq!(
            interpolate_with(5, &XS, &YS, -0.3, opts).unwrap(),
            13.5,
            epsilon = 1e-12
        );
    }
}
