//! CLI error types

use crate::config::ConfigError;
use interp_core::types::InterpolationError;
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Interpolation failed
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command line value or input data
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering failed
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
