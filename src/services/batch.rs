use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TrainingError;
use crate::models::{TrainingSummary, WorkoutRecord};

/// How summaries are written to the output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other} (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// A record that could not be turned into a summary
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub index: usize,
    pub tag: String,
    pub error: TrainingError,
}

/// Outcome of processing a list of records
#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub processed: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write one summary in the requested format, followed by a newline
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &TrainingSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{summary}"),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)
        }
    }
}

/// Evaluate every record and write its summary to `out`.
///
/// A record that fails to dispatch is logged and collected in the report;
/// the remaining records are still processed. Only a write error on `out`
/// stops the batch.
pub fn process_packages<W: Write>(
    records: &[WorkoutRecord],
    out: &mut W,
    format: OutputFormat,
) -> io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for (index, record) in records.iter().enumerate() {
        match record.to_training() {
            Ok(training) => {
                write_summary(out, &training.show_training_info(), format)?;
                report.processed += 1;
            }
            Err(error) => {
                warn!(index, tag = %record.tag, %error, "Skipping sensor package");
                report.failures.push(BatchFailure {
                    index,
                    tag: record.tag.clone(),
                    error,
                });
            }
        }
    }

    info!(
        processed = report.processed,
        failed = report.failures.len(),
        "Batch complete"
    );

    Ok(report)
}
