//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command line flags.

use crate::output::OutputFormat;
use interp_core::math::interpolators::{DegeneratePolicy, ExtrapolationMode, InterpolationOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Log level override (see [`InterpConfig::apply_env_from`]).
pub const ENV_LOG_LEVEL: &str = "INTERP_LOG_LEVEL";
/// Duplicate-x bracket policy override.
pub const ENV_DEGENERATE_POLICY: &str = "INTERP_DEGENERATE_POLICY";
/// Extrapolation mode override.
pub const ENV_EXTRAPOLATION: &str = "INTERP_EXTRAPOLATION";
/// Output format override.
pub const ENV_OUTPUT_FORMAT: &str = "INTERP_OUTPUT_FORMAT";
/// Decimal places override.
pub const ENV_PRECISION: &str = "INTERP_PRECISION";

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "interp.toml";

/// Largest accepted number of decimal places.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unparsable env var or flag value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    /// Precision above [`MAX_PRECISION`]
    #[error("Invalid precision: {0}. Must be at most 17")]
    InvalidPrecision(usize),

    /// Config file missing or malformed
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InterpConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Policy for duplicate-x brackets the query does not hit
    pub degenerate_policy: DegeneratePolicy,
    /// Out-of-range query handling
    pub extrapolation: ExtrapolationMode,
    /// Result rendering
    pub output_format: OutputFormat,
    /// Decimal places for table and plain output
    pub precision: usize,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            degenerate_policy: DegeneratePolicy::Reject,
            extrapolation: ExtrapolationMode::Linear,
            output_format: OutputFormat::Table,
            precision: 6,
        }
    }
}

impl InterpConfig {
    /// Create a new InterpConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Policies handed to the interpolator
    pub fn options(&self) -> InterpolationOptions {
        InterpolationOptions {
            degenerate: self.degenerate_policy,
            extrapolation: self.extrapolation,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: InterpConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from a variable lookup (see the `ENV_*` constants)
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(policy) = lookup(ENV_DEGENERATE_POLICY) {
            self.degenerate_policy = parse_value(ENV_DEGENERATE_POLICY, &policy)?;
        }

        if let Some(mode) = lookup(ENV_EXTRAPOLATION) {
            self.extrapolation = parse_value(ENV_EXTRAPOLATION, &mode)?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = parse_value(ENV_OUTPUT_FORMAT, &format)?;
        }

        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = parse_value(ENV_PRECISION, &precision)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        if let Some(policy) = &cli.degenerate {
            self.degenerate_policy = parse_value("--degenerate", policy)?;
        }
        if let Some(mode) = &cli.extrapolation {
            self.extrapolation = parse_value("--extrapolation", mode)?;
        }
        if let Some(format) = &cli.format {
            self.output_format = parse_value("--format", format)?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Raise the default log level to debug
    pub verbose: bool,
    /// Log level override
    pub log_level: Option<String>,
    /// Degenerate policy override
    pub degenerate: Option<String>,
    /// Extrapolation mode override
    pub extrapolation: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Decimal places override
    pub precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<InterpConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<InterpConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    build_config_from(cli, Path::new(DEFAULT_CONFIG_FILE), lookup)
}

/// [`build_config_with_env`] with an explicit fallback config file
///
/// `default_file` is only read when no config file was passed and it exists;
/// an explicitly passed file must exist.
pub fn build_config_from<F>(
    cli: &CliArgs,
    default_file: &Path,
    lookup: F,
) -> Result<InterpConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => InterpConfig::from_file(path)?,
        None if default_file.is_file() => InterpConfig::from_file(default_file)?,
        None => InterpConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
