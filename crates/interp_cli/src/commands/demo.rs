//! Demo command implementation
//!
//! Runs the five-point worked example: samples out of x order, one query
//! inside the range and one below it.

use tracing::info;

use super::eval;
use crate::config::InterpConfig;
use crate::input::Samples;
use crate::output;
use crate::Result;

/// Demo sample x-coordinates (deliberately unsorted)
pub const DEMO_XS: [f64; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
/// Demo sample y-values paired with [`DEMO_XS`]
pub const DEMO_YS: [f64; 5] = [10.0, 0.0, 15.0, 5.0, 0.0];
/// Demo queries: interior and below the sampled range
pub const DEMO_QUERIES: [f64; 2] = [-0.3, -5.0];

/// Run the demo command
pub fn run(config: &InterpConfig) -> Result<()> {
    info!("Running interpolation demo");

    let samples = Samples {
        xs: DEMO_XS.to_vec(),
        ys: DEMO_YS.to_vec(),
    };

    let report = eval::evaluate(&samples, &DEMO_QUERIES, config.options())?;
    println!(
        "{}",
        output::render(&report, config.output_format, config.precision)?
    );

    Ok(())
}
