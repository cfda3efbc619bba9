//! Bracket lookup over sorted sample coordinates.

use crate::types::InterpolationError;
use num_traits::Float;

/// Locate the bracket for `x` in ascending `xs`.
///
/// Returns the index `i` such that `(xs[i - 1], xs[i])` is the bracket used
/// for interpolation. `i` starts out as the left-most position whose value
/// is `>= x`. Queries at or below the first sample are moved to `i = 1` and
/// queries above the last sample to `i = n - 1`, so the result always
/// satisfies `1 <= i <= n - 1` and out-of-range queries land on the nearest
/// bracket for extrapolation.
///
/// `xs` must be sorted ascending; ties are allowed. The bound `n` is the
/// length of `xs`.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - fewer than 2 coordinates
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::locate;
///
/// let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
/// assert_eq!(locate(-0.3, &xs).unwrap(), 2); // bracket (-1, 0)
/// assert_eq!(locate(-5.0, &xs).unwrap(), 1); // leftmost bracket
/// assert_eq!(locate(9.0, &xs).unwrap(), 4);  // rightmost bracket
/// ```
#[inline]
pub fn locate<T: Float>(x: T, xs: &[T]) -> Result<usize, InterpolationError> {
    let n = xs.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }

    // First index where xs[i] < x stops holding
    let lo = xs.partition_point(|&xi| xi < x);

    Ok(if lo == 0 {
        1
    } else if lo == n {
        n - 1
    } else {
        lo
    })
}
