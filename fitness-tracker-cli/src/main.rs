use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fitness_tracker_cli::commands::Cli;
use fitness_tracker_cli::config::Config;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging; stdout is reserved for summaries
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&cli, &config)?)
        .with_writer(std::io::stderr)
        .init();

    // Config loads before the subscriber is installed
    tracing::debug!(
        format = %config.output.format,
        records = config.records.len(),
        "Configuration loaded"
    );

    cli.execute(&config)
}

fn log_filter(cli: &Cli, config: &Config) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    if cli.verbose() {
        return Ok(EnvFilter::new("debug"));
    }

    EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log level in config: {}", config.logging.level))
}
