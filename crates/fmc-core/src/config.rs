//! Configuration for fmc-core
//!
//! Groups the metric parameter (amplification factor) and the default ranking
//! options, loadable from TOML or JSON.

use crate::error::FmcResult;
use crate::metric::FeaturesMaximizationMetric;
use crate::query::RankingOptions;
use crate::sparse::SparseMatrix;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metric and ranking configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FmcConfig {
    /// Metric parameters
    #[serde(default)]
    pub metric: MetricConfig,
    /// Default ranking options for queries
    #[serde(default)]
    pub ranking: RankingOptions,
}

/// Metric parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Exponent of the contrast ratio, usually 1
    pub amplification_factor: f64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            amplification_factor: 1.0,
        }
    }
}

impl FmcConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.metric.amplification_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "metric.amplification_factor must be a finite positive number (got {})",
                factor
            )));
        }
        Ok(())
    }

    /// Compute a metric with these parameters
    pub fn build<C, F>(
        &self,
        data_vectors: &SparseMatrix,
        data_classes: &[C],
        features: &[F],
    ) -> FmcResult<FeaturesMaximizationMetric>
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        FeaturesMaximizationMetric::with_amplification(
            data_vectors,
            data_classes,
            features,
            self.metric.amplification_factor,
        )
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortBy;

    #[test]
    fn test_default_config_is_valid() {
        let config = FmcConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.metric.amplification_factor, 1.0);
        assert!(config.ranking.activation_only);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = FmcConfig::default();
        config.metric.amplification_factor = 2.0;
        config.ranking.sort_by = SortBy::FMeasure;
        config.ranking.max_number = Some(5);

        let toml_str = config.to_toml().unwrap();
        let parsed = FmcConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FmcConfig::from_toml(
            r#"
            [ranking]
            sort_by = "fmeasure"
            "#,
        )
        .unwrap();
        assert_eq!(config.metric.amplification_factor, 1.0);
        assert_eq!(config.ranking.sort_by, SortBy::FMeasure);
        assert!(config.ranking.activation_only);
    }

    #[test]
    fn test_invalid_factor_rejected() {
        let err = FmcConfig::from_toml("[metric]\namplification_factor = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange(_)));
        assert!(matches!(
            FmcConfig::from_toml("[metric]\namplification_factor = \"big\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FmcConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(FmcConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_build() {
        let weights = SparseMatrix::from_dense(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
        let mut config = FmcConfig::default();
        config.metric.amplification_factor = 3.0;
        let fmc = config.build(&weights, &["x", "y"], &["a", "b"]).unwrap();
        assert_eq!(fmc.amplification_factor(), 3.0);
    }
}
