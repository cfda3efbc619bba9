//! Sample loading
//!
//! Samples come either from inline `--xs`/`--ys` lists or from a CSV file
//! with a header row; columns are selected by name.

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Paired sample coordinates, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    /// x-coordinates
    pub xs: Vec<f64>,
    /// y-values paired with `xs`
    pub ys: Vec<f64>,
}

impl Samples {
    /// Number of samples; both columns have this length once validated
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when no samples were loaded
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Where `eval` takes its samples from
#[derive(Debug, Clone)]
pub enum SampleSource {
    /// Values from `--xs`/`--ys`
    Inline { xs: Vec<f64>, ys: Vec<f64> },
    /// CSV file with a header row; columns picked by name
    Csv {
        path: String,
        x_column: String,
        y_column: String,
    },
}

impl SampleSource {
    /// Materialise the samples
    pub fn load(&self) -> Result<Samples> {
        match self {
            SampleSource::Inline { xs, ys } => {
                if xs.is_empty() && ys.is_empty() {
                    return Err(CliError::InvalidArgument(
                        "no samples given: use --xs/--ys or --data".to_string(),
                    ));
                }
                if xs.len() != ys.len() {
                    return Err(CliError::InvalidArgument(format!(
                        "--xs has {} values but --ys has {}",
                        xs.len(),
                        ys.len()
                    )));
                }
                Ok(Samples {
                    xs: xs.clone(),
                    ys: ys.clone(),
                })
            }
            SampleSource::Csv {
                path,
                x_column,
                y_column,
            } => load_csv_samples(Path::new(path), x_column, y_column),
        }
    }
}

/// Load samples from a CSV file on disk
pub fn load_csv_samples(path: &Path, x_column: &str, y_column: &str) -> Result<Samples> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| CliError::InvalidArgument(format!("{}: {}", path.display(), e)))?;
    let samples = read_csv_samples(file, x_column, y_column)?;

    debug!(path = %path.display(), samples = samples.len(), "loaded CSV samples");
    Ok(samples)
}

/// Read samples from any CSV source with a header row
pub fn read_csv_samples<R: Read>(reader: R, x_column: &str, y_column: &str) -> Result<Samples> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let x_idx = column_index(&headers, x_column)?;
    let y_idx = column_index(&headers, y_column)?;

    let mut samples = Samples::default();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        samples.xs.push(parse_field(&record, x_idx, x_column, line)?);
        samples.ys.push(parse_field(&record, y_idx, y_column, line)?);
    }

    Ok(samples)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "column '{}' not found; available: {}",
            name,
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
    })
}

fn parse_field(record: &csv::StringRecord, idx: usize, column: &str, line: u64) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| {
        CliError::InvalidArgument(format!(
            "line {}: column '{}' value '{}' is not a number",
            line, column, raw
        ))
    })
}
