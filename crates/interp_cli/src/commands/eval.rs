//! Eval command implementation
//!
//! Interpolates one or more query points against a sample set.

use interp_core::math::interpolators::{InterpolationOptions, Interpolator, LinearInterpolator};
use tracing::{debug, info};

use crate::config::InterpConfig;
use crate::input::{SampleSource, Samples};
use crate::output::{self, Evaluation, Report};
use crate::{CliError, Result};

/// Evaluate every query against `samples`, stopping at the first failure
pub fn evaluate(samples: &Samples, queries: &[f64], options: InterpolationOptions) -> Result<Report> {
    if queries.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one query point is required (--at)".to_string(),
        ));
    }

    let interp = LinearInterpolator::new(&samples.xs, &samples.ys)?.with_options(options);
    let (x_min, x_max) = interp.domain();

    let results = queries
        .iter()
        .map(|&x| -> Result<Evaluation> {
            let y = interp.interpolate(x)?;
            let bracket = interp.bracket(x)?;
            debug!(x, y, index = bracket.index, "evaluated query");
            Ok(Evaluation {
                x,
                y,
                lower: bracket.lower,
                upper: bracket.upper,
                extrapolated: x < x_min || x > x_max,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Report {
        samples: interp.len(),
        domain: (x_min, x_max),
        degenerate_policy: options.degenerate,
        extrapolation: options.extrapolation,
        results,
    })
}

/// Run the eval command
pub fn run(source: &SampleSource, queries: &[f64], config: &InterpConfig) -> Result<()> {
    info!("Starting evaluation...");
    info!("  Queries: {}", queries.len());
    info!("  Degenerate policy: {}", config.degenerate_policy);
    info!("  Extrapolation: {}", config.extrapolation);

    let samples = source.load()?;
    info!("  Samples: {}", samples.len());

    let report = evaluate(&samples, queries, config.options())?;
    println!(
        "{}",
        output::render(&report, config.output_format, config.precision)?
    );

    info!("Evaluation complete");
    Ok(())
}
