use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use fitness_tracker::services::BatchReport;
use fitness_tracker::{process_packages, OutputFormat};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::Config;

#[derive(Args, Default)]
pub struct RunCommand {
    /// Output format (text or json); defaults to the configured format
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl RunCommand {
    pub fn execute(self, config: &Config) -> Result<ExitCode> {
        let format = self.format.unwrap_or(config.output.format);
        let records = config.records();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = process_packages(&records, &mut out, format)
            .context("Failed to write training summaries")?;
        out.flush().context("Failed to flush stdout")?;

        Ok(report_failures(&report))
    }
}

/// Print skipped records to stderr and map the report to an exit code
pub fn report_failures(report: &BatchReport) -> ExitCode {
    for failure in &report.failures {
        eprintln!(
            "{} record #{} ({}): {}",
            "skipped".red().bold(),
            failure.index + 1,
            failure.tag,
            failure.error
        );
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
