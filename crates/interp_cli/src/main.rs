//! interp - Linear interpolation from the command line
//!
//! # Commands
//!
//! - `interp eval --xs <X,...> --ys <Y,...> --at <X>` - Interpolate inline samples
//! - `interp eval --data <file.csv> --at <X>` - Interpolate samples from a CSV file
//! - `interp demo` - Run the built-in worked example
//! - `interp check` - Print the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use interp_cli::commands;
use interp_cli::config::{build_config, CliArgs};
use interp_cli::input::SampleSource;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Linear interpolation with extrapolation over unsorted samples
#[derive(Parser)]
#[command(name = "interp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format); defaults to ./interp.toml when present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Duplicate-x bracket policy (reject, zero, max)
    #[arg(long, global = true)]
    degenerate: Option<String>,

    /// Out-of-range query handling (linear, error)
    #[arg(long, global = true)]
    extrapolation: Option<String>,

    /// Output format (table, json, plain)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Decimal places in table and plain output
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate query points against a sample set
    Eval {
        /// Sample x-coordinates, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "ys")]
        xs: Vec<f64>,

        /// Sample y-values, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "xs")]
        ys: Vec<f64>,

        /// CSV file with a header row
        #[arg(short, long, conflicts_with_all = ["xs", "ys"])]
        data: Option<String>,

        /// Column holding x-coordinates
        #[arg(long, default_value = "x")]
        x_column: String,

        /// Column holding y-values
        #[arg(long, default_value = "y")]
        y_column: String,

        /// Query points, comma separated or repeated
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        at: Vec<f64>,
    },

    /// Run the built-in worked example
    Demo,

    /// Print the effective configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        verbose: cli.verbose,
        log_level: cli.log_level.clone(),
        degenerate: cli.degenerate.clone(),
        extrapolation: cli.extrapolation.clone(),
        format: cli.format.clone(),
        precision: cli.precision,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = interp_cli::VERSION,
        log_level = %config.log_level,
        degenerate = %config.degenerate_policy,
        extrapolation = %config.extrapolation,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Eval {
            xs,
            ys,
            data,
            x_column,
            y_column,
            at,
        } => {
            let source = match data {
                Some(path) => SampleSource::Csv {
                    path,
                    x_column,
                    y_column,
                },
                None => SampleSource::Inline { xs, ys },
            };
            commands::eval::run(&source, &at, &config)?
        }
        Commands::Demo => commands::demo::run(&config)?,
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
