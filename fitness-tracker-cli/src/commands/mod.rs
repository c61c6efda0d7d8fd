mod calc;
mod config_cmd;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub use calc::CalcCommand;
pub use run::{report_failures, RunCommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Training statistics calculator for sensor packages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the configured sensor packages (the default)
    Run(RunCommand),

    /// Compute a single sensor package
    Calc(CalcCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Write a configuration file with defaults and the sample packages
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Load the configuration this invocation runs with.
    ///
    /// `config init` and `completions` never read the file, so a broken or
    /// missing config does not block them.
    pub fn load_config(&self) -> Result<Config> {
        match self.command {
            Some(Commands::Config(ConfigSubcommands::Init { .. }))
            | Some(Commands::Completions { .. }) => Ok(Config::default()),
            _ => Config::load(self.config.as_deref()),
        }
    }

    pub fn execute(self, config: &Config) -> Result<ExitCode> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        match self.command {
            None => RunCommand::default().execute(config),
            Some(Commands::Run(cmd)) => cmd.execute(config),
            Some(Commands::Calc(cmd)) => cmd.execute(config).map(|()| ExitCode::SUCCESS),
            Some(Commands::Config(subcmd)) => {
                match subcmd {
                    ConfigSubcommands::Show => config_cmd::show_config(config)?,
                    ConfigSubcommands::Init { force } => {
                        config_cmd::init_config(self.config.as_deref(), force)?
                    }
                }
                Ok(ExitCode::SUCCESS)
            }
            Some(Commands::Completions { shell }) => {
                generate_completions(shell);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
