//! fmc-cli - Command-line reports for the Features Maximization Metric
//!
//! ```bash
//! fmc analyze people.csv --top 3
//! fmc feature people.csv "Hair size"
//! fmc compare by_age.csv by_role.csv --rounded 4
//! fmc config
//! ```

pub mod commands;
pub mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::{AnalyzeCommand, CompareCommand, ConfigCommand, FeatureCommand};
pub use config::CliConfig;

/// Features Maximization Metric: feature selection and contrast over
/// labelled data
#[derive(Parser, Debug)]
#[command(name = "fmc", version, about)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/fmc/config.toml)
    #[arg(long, global = true, env = "FMC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deleted features, then the active features of every class
    Analyze(AnalyzeCommand),
    /// Class profile of one feature
    Feature(FeatureCommand),
    /// Agreement of two labelings of the same features
    Compare(CompareCommand),
    /// Print the effective configuration
    Config(ConfigCommand),
}

impl Commands {
    /// Run the command and return what it prints
    pub fn run(&self, config: &CliConfig) -> Result<String> {
        match self {
            Commands::Analyze(cmd) => cmd.run(config),
            Commands::Feature(cmd) => cmd.run(config),
            Commands::Compare(cmd) => cmd.run(config),
            Commands::Config(cmd) => cmd.run(config),
        }
    }
}
