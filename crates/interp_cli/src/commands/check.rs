//! Check command implementation
//!
//! Prints the effective configuration after file, environment and flag
//! overrides have been applied.

use tracing::info;

use crate::config::InterpConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &InterpConfig) -> Result<()> {
    info!("Checking configuration...");

    let text = toml::to_string_pretty(config).map_err(|e| CliError::Serialisation(e.to_string()))?;
    println!("{}", text.trim_end());

    info!("Configuration OK");
    Ok(())
}
