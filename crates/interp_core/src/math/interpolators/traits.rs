//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for 1D interpolators.
///
/// Implementors hold a sample set sorted by x and answer point queries.
/// Whether queries outside [`Interpolator::domain`] are extrapolated or
/// rejected is up to the implementor's configuration.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// fn midpoint_value<I: Interpolator<f64>>(interp: &I) -> f64 {
///     let (lo, hi) = interp.domain();
///     interp.interpolate(0.5 * (lo + hi)).unwrap()
/// }
///
/// let interp = LinearInterpolator::new(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
/// assert!((midpoint_value(&interp) - 2.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Estimate the value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the sampled range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
