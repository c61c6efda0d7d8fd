use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;

fn target_file(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file(),
    }
}

pub fn show_config(config: &Config) -> Result<()> {
    let config_str = toml::to_string_pretty(config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let config_file = target_file(path)?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        records: fitness_tracker::WorkoutRecord::sample_packages(),
        ..Config::default()
    };
    config.save(&config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());

    Ok(())
}
