//! Numerical routines.
//!
//! - `interpolators`: bracket lookup and piecewise linear interpolation

pub mod interpolators;
