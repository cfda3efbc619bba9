//! Bracket lookup and linear interpolation.
//!
//! ## Available Items
//!
//! - [`locate`]: Binary search for the bracket around a query point
//! - [`interpolate`] / [`interpolate_with`]: One-shot estimate from unsorted samples
//! - [`LinearInterpolator`]: Pre-sorted, reusable piecewise linear interpolator
//! - [`DegeneratePolicy`], [`ExtrapolationMode`], [`InterpolationOptions`]: Edge-case policies
//!
//! ## Core Trait
//!
//! 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute the estimate
//! - `domain() -> (T, T)`: Return the sampled range
//!
//! ## Generic Numerics
//!
//! Everything is generic over `T: num_traits::Float`, so `f64` and `f32`
//! samples are handled by the same code.
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod linear;
mod lookup;
mod policy;
mod search;
mod traits;

// Re-export public types at module level
pub use linear::{Bracket, LinearInterpolator};
pub use lookup::{interpolate, interpolate_with};
pub use policy::{DegeneratePolicy, ExtrapolationMode, InterpolationOptions};
pub use search::locate;
pub use traits::Interpolator;
