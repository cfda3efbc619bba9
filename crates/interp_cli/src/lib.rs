//! Command line front end for `interp_core`.
//!
//! The binary (`interp`) is a thin shell: it resolves configuration, loads
//! samples, and hands them to the interpolation kernel. The pieces live here
//! so they can be exercised from tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
