//! # interp_core: Bracket Lookup and Linear Interpolation
//!
//! ## Role
//!
//! interp_core is the computational layer of the workspace, providing:
//! - Binary-search bracket lookup over sorted samples (`math::interpolators::locate`)
//! - One-shot linear interpolation and extrapolation (`math::interpolators::interpolate`)
//! - A reusable, pre-sorted interpolator (`math::interpolators::LinearInterpolator`)
//! - Explicit policies for duplicate-x brackets and out-of-range queries
//! - Error types: `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The crate has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Diagnostic events for bracket and policy decisions
//! - serde: Serialisation support (optional)
//! - rayon: Parallel batch evaluation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::interpolate;
//!
//! let xs: [f64; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
//! let ys = [10.0, 0.0, 15.0, 5.0, 0.0];
//!
//! // Inside the sampled range
//! let y = interpolate(xs.len(), &xs, &ys, -0.3).unwrap();
//! assert!((y - 13.5).abs() < 1e-12);
//!
//! // Below the sampled range: extrapolated along the leftmost bracket
//! let y = interpolate(xs.len(), &xs, &ys, -5.0).unwrap();
//! assert!((y + 30.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for errors and policies
//! - `parallel`: Enable `LinearInterpolator::par_interpolate_many` via rayon

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
