//! Result rendering for the `eval` and `demo` commands.

use crate::error::{CliError, Result};
use interp_core::math::interpolators::{DegeneratePolicy, ExtrapolationMode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed table with brackets
    #[default]
    Table,
    /// Pretty-printed [`Report`]
    Json,
    /// One value per line
    Plain,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, plain",
                other
            ))),
        }
    }
}

/// One evaluated query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Query point
    pub x: f64,
    /// Estimated value
    pub y: f64,
    /// Left bracket point
    pub lower: (f64, f64),
    /// Right bracket point
    pub upper: (f64, f64),
    /// Query outside the sampled range
    pub extrapolated: bool,
}

/// Everything `eval` prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of samples
    pub samples: usize,
    /// Smallest and largest sample x
    pub domain: (f64, f64),
    /// Policy in effect
    pub degenerate_policy: DegeneratePolicy,
    /// Mode in effect
    pub extrapolation: ExtrapolationMode,
    /// One entry per query, in query order
    pub results: Vec<Evaluation>,
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat, precision: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report, precision)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| CliError::Serialisation(e.to_string())),
        OutputFormat::Plain => Ok(report
            .results
            .iter()
            .map(|e| format!("{:.*}", precision, e.y))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_table(report: &Report, precision: usize) -> String {
    let cell = |v: f64| format!("{:.*}", precision, v);
    let pair = |(x, y): (f64, f64)| format!("({}, {})", cell(x), cell(y));

    let rows: Vec<[String; 4]> = report
        .results
        .iter()
        .map(|e| {
            let note = if e.extrapolated { " *" } else { "" };
            [
                cell(e.x),
                format!("{}{}", cell(e.y), note),
                pair(e.lower),
                pair(e.upper),
            ]
        })
        .collect();

    let headers = ["x", "y", "lower", "upper"];
    let widths: Vec<usize> = (0..4)
        .map(|c| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .chain(std::iter::once(headers[c].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!(" {:<w$} ", h, w = *w))
        .collect();

    let mut lines = vec![
        format!(
            "{} samples, domain [{}, {}], degenerate={}, extrapolation={}",
            report.samples,
            cell(report.domain.0),
            cell(report.domain.1),
            report.degenerate_policy,
            report.extrapolation
        ),
        rule("┌", "┬", "┐"),
        format!("│{}│", header.join("│")),
        rule("├", "┼", "┤"),
    ];
    lines.extend(rows.iter().map(|row| {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!(" {:>w$} ", v, w = *w))
            .collect();
        format!("│{}│", cells.join("│"))
    }));
    lines.push(rule("└", "┴", "┘"));

    if report.results.iter().any(|e| e.extrapolated) {
        lines.push("* extrapolated".to_string());
    }
    lines.join("\n")
}
