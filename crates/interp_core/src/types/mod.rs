//! Core types shared across the crate.
//!
//! This module provides:
//! - `error`: Structured error types for sample validation and interpolation
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] is re-exported at this module level.

pub mod error;

pub use error::InterpolationError;
