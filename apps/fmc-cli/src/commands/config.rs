//! `fmc config`

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;

/// Print the effective configuration as TOML
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigCommand {
    /// Print the default file location instead
    #[arg(long)]
    pub path: bool,
}

impl ConfigCommand {
    pub fn run(&self, config: &CliConfig) -> Result<String> {
        if self.path {
            return Ok(match CliConfig::default_path() {
                Some(path) => format!("{}\n", path.display()),
                None => "no configuration directory on this platform\n".to_string(),
            });
        }
        Ok(config.to_toml()?)
    }
}
