//! Linear interpolation implementation.

use super::policy::{DegeneratePolicy, ExtrapolationMode, InterpolationOptions};
use super::{locate, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Adjacent pair of sample points selected for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Index of the right-hand point in the sorted sample set (`1..=n-1`)
    pub index: usize,
    /// Left-hand point `(x0, y0)`
    pub lower: (T, T),
    /// Right-hand point `(x1, y1)`
    pub upper: (T, T),
}

impl<T: Float> Bracket<T> {
    /// Returns true when both points share the same x.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lower.0 == self.upper.0
    }
}

/// Piecewise linear interpolator with linear extrapolation.
///
/// Stores sorted (x, y) data points and evaluates the line through the
/// bracket returned by [`locate`]. Queries outside the sampled range reuse
/// the nearest bracket unless [`ExtrapolationMode::Error`] is selected.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are sorted by x-coordinate during construction, ties ordered
/// by y. At least 2 data points are required and every x must be finite.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// assert!((interp.interpolate(4.0).unwrap() - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
    /// Edge-case policies
    options: InterpolationOptions,
}

/// Ascending order with NaN placed last, so the comparison stays total.
#[inline]
fn cmp_nan_last<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// Pairs are sorted ascending by x with a stable sort; equal x values
    /// are ordered by y. Default [`InterpolationOptions`] apply.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths or non-finite x
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::LinearInterpolator;
    ///
    /// // Valid construction
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// // Insufficient data
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
            return Err(InterpolationError::InvalidInput(format!(
                "x-coordinate at index {} is not finite",
                index
            )));
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| cmp_nan_last(a.0, b.0).then_with(|| cmp_nan_last(a.1, b.1)));

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            options: InterpolationOptions::default(),
        })
    }

    /// Replace all edge-case policies.
    pub fn with_options(mut self, options: InterpolationOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the duplicate-x bracket policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.options.degenerate = policy;
        self
    }

    /// Set the out-of-range query mode.
    pub fn with_extrapolation(mut self, mode: ExtrapolationMode) -> Self {
        self.options.extrapolation = mode;
        self
    }

    /// Returns the active policies.
    #[inline]
    pub fn options(&self) -> InterpolationOptions {
        self.options
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the bracket that [`Interpolator::interpolate`] would use for `x`.
    pub fn bracket(&self, x: T) -> Result<Bracket<T>, InterpolationError> {
        let i = locate(x, &self.xs)?;
        Ok(Bracket {
            index: i,
            lower: (self.xs[i - 1], self.ys[i - 1]),
            upper: (self.xs[i], self.ys[i]),
        })
    }

    /// Interpolate every query in order, stopping at the first error.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 10.0]).unwrap();
    /// let ys = interp.interpolate_many(&[0.25, 0.5, 2.0]).unwrap();
    /// assert_eq!(ys, vec![2.5, 5.0, 20.0]);
    /// ```
    pub fn interpolate_many(&self, queries: &[T]) -> Result<Vec<T>, InterpolationError> {
        queries.iter().map(|&x| self.interpolate(x)).collect()
    }

    fn check_query(&self, x: T) -> Result<(), InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::InvalidInput(
                "query point is not finite".to_string(),
            ));
        }

        if self.options.extrapolation == ExtrapolationMode::Error {
            let (x_min, x_max) = self.domain();
            if x < x_min || x > x_max {
                return Err(InterpolationError::OutOfBounds {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    min: x_min.to_f64().unwrap_or(f64::NAN),
                    max: x_max.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }

    fn resolve_degenerate(&self, x: T, bracket: &Bracket<T>) -> Result<T, InterpolationError> {
        let (x0, y0) = bracket.lower;
        let (_, y1) = bracket.upper;

        if x == x0 {
            return Ok(y0.min(y1));
        }

        debug!(
            policy = %self.options.degenerate,
            index = bracket.index,
            "query beside duplicate-x bracket"
        );

        match self.options.degenerate {
            DegeneratePolicy::Reject => Err(InterpolationError::DegenerateBracket {
                x: x.to_f64().unwrap_or(f64::NAN),
                bracket_x: x0.to_f64().unwrap_or(f64::NAN),
            }),
            DegeneratePolicy::Zero => Ok(T::zero()),
            DegeneratePolicy::Max => Ok(y0.max(y1)),
        }
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> LinearInterpolator<T> {
    /// Parallel counterpart of [`LinearInterpolator::interpolate_many`].
    ///
    /// Queries are independent, so the output matches the sequential
    /// version element for element.
    pub fn par_interpolate_many(&self, queries: &[T]) -> Result<Vec<T>, InterpolationError> {
        use rayon::prelude::*;

        queries.par_iter().map(|&x| self.interpolate(x)).collect()
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate or extrapolate the value at `x`.
    ///
    /// Uses [`locate`] (O(log n)) to pick the bracket `(x0, y0)`, `(x1, y1)`,
    /// then applies
    ///
    /// ```text
    /// y = y0 + ((y1 - y0) / (x1 - x0)) * (x - x0)
    /// ```
    ///
    /// whether or not `x` lies inside the bracket. A bracket with `x0 == x1`
    /// returns `min(y0, y1)` when `x == x0` and otherwise defers to the
    /// configured [`DegeneratePolicy`].
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated or extrapolated value
    /// * `Err(InterpolationError::InvalidInput)` - `x` is not finite
    /// * `Err(InterpolationError::OutOfBounds)` - `x` outside the domain with [`ExtrapolationMode::Error`]
    /// * `Err(InterpolationError::DegenerateBracket)` - duplicate-x bracket with [`DegeneratePolicy::Reject`]
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    ///
    /// // Interpolate at midpoint
    /// let y = interp.interpolate(0.5).unwrap();
    /// assert!((y - 1.0).abs() < 1e-10);
    ///
    /// // Extrapolate below the first knot
    /// let y = interp.interpolate(-1.0).unwrap();
    /// assert!((y + 2.0).abs() < 1e-10);
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.check_query(x)?;

        let bracket = self.bracket(x)?;
        trace!(index = bracket.index, "bracket located");

        if bracket.is_degenerate() {
            return self.resolve_degenerate(x, &bracket);
        }

        let (x0, y0) = bracket.lower;
        let (x1, y1) = bracket.upper;

        Ok(y0 + ((y1 - y0) / (x1 - x0)) * (x - x0))
    }

    /// Return the sampled range `(x_min, x_max)`.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
    /// assert_eq!(interp.domain(), (1.0, 3.0));
    /// ```
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data_zero_points() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];

        match LinearInterpolator::new(&xs, &ys).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_insufficient_data_one_point() {
        match LinearInterpolator::new(&[1.0], &[2.0]).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        match LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err() {
            InterpolationError::InvalidInput(msg) => {
                assert!(msg.contains("same length"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_rejects_non_finite_x() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match LinearInterpolator::new(&[0.0, bad, 2.0], &[0.0, 1.0, 2.0]).unwrap_err() {
                InterpolationError::InvalidInput(msg) => {
                    assert!(msg.contains("index 1"));
                }
                _ => panic!("Expected InvalidInput error"),
            }
        }
    }

    #[test]
    fn test_new_auto_sorts_unsorted_data() {
        let interp = LinearInterpolator::new(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]).unwrap();

        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(interp.ys(), &[0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_new_orders_equal_x_by_y() {
        let interp =
            LinearInterpolator::new(&[1.0, 0.0, 1.0, 1.0], &[7.0, 0.0, 3.0, 5.0]).unwrap();

        assert_eq!(interp.xs(), &[0.0, 1.0, 1.0, 1.0]);
        assert_eq!(interp.ys(), &[0.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_new_tolerates_nan_y() {
        let interp =
            LinearInterpolator::new(&[1.0, 1.0, 0.0], &[f64::NAN, 2.0, 0.0]).unwrap();

        assert_eq!(interp.xs(), &[0.0, 1.0, 1.0]);
        assert_eq!(interp.ys()[1], 2.0);
        assert!(interp.ys()[2].is_nan());
    }

    #[test]
    fn test_clone_and_debug() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        let cloned = interp.clone();
        assert_eq!(interp.xs(), cloned.xs());
        assert_eq!(interp.ys(), cloned.ys());

        let debug_str = format!("{:?}", interp);
        assert!(debug_str.contains("LinearInterpolator"));
    }

    #[test]
    fn test_builder_setters() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0])
            .unwrap()
            .with_degenerate_policy(DegeneratePolicy::Max)
            .with_extrapolation(ExtrapolationMode::Error);

        assert_eq!(interp.options().degenerate, DegeneratePolicy::Max);
        assert_eq!(interp.options().extrapolation, ExtrapolationMode::Error);

        let reset = interp.with_options(InterpolationOptions::default());
        assert_eq!(reset.options(), InterpolationOptions::default());
    }

    // ========================================
    // Interpolation Tests
    // ========================================

    #[test]
    fn test_domain() {
        let interp =
            LinearInterpolator::new(&[1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0]).unwrap();
        assert_eq!(interp.domain(), (1.0, 4.0));
    }

    #[test]
    fn test_interpolate_at_knot_points() {
        let interp =
            LinearInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_arbitrary_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        // Between (0,0) and (1,1)
        assert_relative_eq!(interp.interpolate(0.25).unwrap(), 0.25, epsilon = 1e-12);
        // Between (1,1) and (2,4): 1 + 3 * 0.5
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.75).unwrap(), 3.25, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_non_uniform_spacing() {
        let interp =
            LinearInterpolator::new(&[0.0, 0.1, 1.0, 10.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.05).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.55).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_worked_scenario() {
        let interp = LinearInterpolator::new(
            &[-1.0, -2.0, 0.0, 2.0, 1.0],
            &[10.0, 0.0, 15.0, 5.0, 0.0],
        )
        .unwrap();

        assert_relative_eq!(interp.interpolate(-0.3).unwrap(), 13.5, epsilon = 1e-12);
    }

    // ========================================
    // Extrapolation Tests
    // ========================================

    #[test]
    fn test_extrapolate_below_domain() {
        let interp = LinearInterpolator::new(
            &[-1.0, -2.0, 0.0, 2.0, 1.0],
            &[10.0, 0.0, 15.0, 5.0, 0.0],
        )
        .unwrap();

        // Leftmost bracket (-2,0)-(-1,10): 0 + 10 * (-3)
        assert_relative_eq!(interp.interpolate(-5.0).unwrap(), -30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolate_above_domain() {
        let interp = LinearInterpolator::new(
            &[-1.0, -2.0, 0.0, 2.0, 1.0],
            &[10.0, 0.0, 15.0, 5.0, 0.0],
        )
        .unwrap();

        // Rightmost bracket (1,0)-(2,5): 0 + 5 * 2
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_error_mode_rejects_out_of_bounds_low() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
            .unwrap()
            .with_extrapolation(ExtrapolationMode::Error);

        match interp.interpolate(-0.1).unwrap_err() {
            InterpolationError::OutOfBounds { x, min, max } => {
                assert_relative_eq!(x, -0.1, epsilon = 1e-12);
                assert_relative_eq!(min, 0.0, epsilon = 1e-12);
                assert_relative_eq!(max, 2.0, epsilon = 1e-12);
            }
            _ => panic!("Expected OutOfBounds error"),
        }
    }

    #[test]
    fn test_error_mode_rejects_out_of_bounds_high() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
            .unwrap()
            .with_extrapolation(ExtrapolationMode::Error);

        assert!(matches!(
            interp.interpolate(2.1),
            Err(InterpolationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_error_mode_accepts_boundaries() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
            .unwrap()
            .with_extrapolation(ExtrapolationMode::Error);

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_finite_query() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();

        assert!(interp.interpolate(f64::NAN).unwrap_err().is_invalid_input());
        assert!(interp.interpolate(f64::INFINITY).unwrap_err().is_invalid_input());
    }

    // ========================================
    // Degenerate Bracket Tests
    // ========================================

    #[test]
    fn test_degenerate_query_on_duplicate_returns_min() {
        let interp = LinearInterpolator::new(&[1.0, 1.0], &[3.0, 2.0]).unwrap();
        assert_eq!(interp.interpolate(1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_degenerate_min_at_left_edge_of_larger_set() {
        let interp =
            LinearInterpolator::new(&[0.0, 0.0, 1.0], &[4.0, -1.0, 10.0]).unwrap();
        assert_eq!(interp.interpolate(0.0).unwrap(), -1.0);
    }

    #[test]
    fn test_degenerate_reject_is_default() {
        let interp = LinearInterpolator::new(&[1.0, 1.0], &[3.0, 2.0]).unwrap();

        match interp.interpolate(2.0).unwrap_err() {
            InterpolationError::DegenerateBracket { x, bracket_x } => {
                assert_eq!(x, 2.0);
                assert_eq!(bracket_x, 1.0);
            }
            _ => panic!("Expected DegenerateBracket error"),
        }
    }

    #[test]
    fn test_degenerate_zero_policy() {
        let interp = LinearInterpolator::new(&[1.0, 1.0], &[3.0, 2.0])
            .unwrap()
            .with_degenerate_policy(DegeneratePolicy::Zero);

        assert_eq!(interp.interpolate(2.0).unwrap(), 0.0);
        assert_eq!(interp.interpolate(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_degenerate_max_policy() {
        let interp = LinearInterpolator::new(&[1.0, 1.0], &[3.0, 2.0])
            .unwrap()
            .with_degenerate_policy(DegeneratePolicy::Max);

        assert_eq!(interp.interpolate(2.0).unwrap(), 3.0);
        // Query on the duplicate still takes the minimum
        assert_eq!(interp.interpolate(1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_degenerate_right_edge_extrapolation() {
        // Duplicate x at the top of the range, query above it
        let interp = LinearInterpolator::new(&[0.0, 2.0, 2.0], &[0.0, 1.0, 5.0])
            .unwrap()
            .with_degenerate_policy(DegeneratePolicy::Max);

        assert_eq!(interp.interpolate(3.0).unwrap(), 5.0);
    }

    #[test]
    fn test_interior_duplicate_uses_left_bracket() {
        // locate returns the left-most duplicate, so the bracket is (0,0)-(1,a)
        let interp =
            LinearInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0, 4.0, 8.0, 8.0]).unwrap();

        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 2.0, epsilon = 1e-12);
    }

    // ========================================
    // Bracket and Batch Tests
    // ========================================

    #[test]
    fn test_bracket() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();

        let b = interp.bracket(1.5).unwrap();
        assert_eq!(b.index, 2);
        assert_eq!(b.lower, (1.0, 6.0));
        assert_eq!(b.upper, (2.0, 7.0));
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_interpolate_many_stops_at_first_error() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();

        let ys = interp.interpolate_many(&[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(ys, vec![0.0, 0.5, 1.0]);

        assert!(interp.interpolate_many(&[0.5, f64::NAN]).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_interpolate_many_matches_sequential() {
        let xs: Vec<f64> = (0..50).map(|i| i as f64 * 0.3).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        let queries: Vec<f64> = (0..500).map(|i| -2.0 + i as f64 * 0.04).collect();
        assert_eq!(
            interp.par_interpolate_many(&queries).unwrap(),
            interp.interpolate_many(&queries).unwrap()
        );
    }

    #[test]
    fn test_interpolate_f32() {
        let interp = LinearInterpolator::new(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 2.0, 4.0]).unwrap();

        let y = interp.interpolate(0.5_f32).unwrap();
        assert!((y - 1.0_f32).abs() < 1e-6);
    }
}
