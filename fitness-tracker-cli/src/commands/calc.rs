use anyhow::{Context, Result};
use clap::Args;
use fitness_tracker::services::write_summary;
use fitness_tracker::{read_package, OutputFormat};
use std::io;

use crate::config::Config;

#[derive(Args)]
pub struct CalcCommand {
    /// Workout tag: RUN, WLK or SWM
    tag: String,

    /// Sensor readings in package order (e.g. "15000 1 75" for RUN)
    #[arg(required = true, allow_negative_numbers = true)]
    readings: Vec<f64>,

    /// Output format (text or json); defaults to the configured format
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

impl CalcCommand {
    pub fn execute(self, config: &Config) -> Result<()> {
        let training = read_package(&self.tag, &self.readings)?;
        let format = self.format.unwrap_or(config.output.format);

        write_summary(&mut io::stdout().lock(), &training.show_training_info(), format)
            .context("Failed to write training summary")
    }
}
