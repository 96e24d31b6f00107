//! Configuration file of the `fmc` binary
//!
//! ```toml
//! [metric]
//! amplification_factor = 1.0
//!
//! [ranking]
//! sort_by = "contrast"
//! activation_only = true
//!
//! [input]
//! format = "dense"
//! class_column = "class"
//! ```

use anyhow::{Context, Result};
use fmc_core::{ConfigError, FmcConfig, MetricConfig, RankingOptions};
use fmc_io::ReadOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub metric: MetricConfig,
    #[serde(default)]
    pub ranking: RankingOptions,
    #[serde(default)]
    pub input: ReadOptions,
}

impl CliConfig {
    /// Default location: `<config dir>/fmc/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fmc").join("config.toml"))
    }

    /// Load `path`, else the default location if it exists, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid configuration {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.metric_config().validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// The metric and ranking sections
    pub fn metric_config(&self) -> FmcConfig {
        FmcConfig {
            metric: self.metric.clone(),
            ranking: self.ranking.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmc_core::SortBy;
    use fmc_io::DatasetFormat;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.metric.amplification_factor, 1.0);
        assert_eq!(config.input.class_column, "class");
        assert_eq!(config.input.format, DatasetFormat::Dense);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CliConfig::default();
        config.ranking.sort_by = SortBy::FMeasure;
        config.input.format = DatasetFormat::Coordinate;
        config.input.delimiter = Some('\t');

        let toml_str = config.to_toml().unwrap();
        assert_eq!(CliConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::from_toml("[input]\nclass_column = \"gender\"\n").unwrap();
        assert_eq!(config.input.class_column, "gender");
        assert_eq!(config.input.format, DatasetFormat::Dense);
        assert!(config.ranking.activation_only);
    }

    #[test]
    fn test_invalid_factor() {
        assert!(CliConfig::from_toml("[metric]\namplification_factor = -1.0\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[metric]\namplification_factor = 2.5").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.metric.amplification_factor, 2.5);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        assert!(CliConfig::load(Some(Path::new("/nonexistent/fmc.toml"))).is_err());
    }
}
