//! Subcommands
//!
//! - [`analyze`]: deleted features and active features per class
//! - [`feature`]: class profile of one feature
//! - [`compare`]: agreement of two labelings
//! - [`config`]: effective configuration

mod analyze;
mod compare;
mod config;
mod feature;

pub use analyze::AnalyzeCommand;
pub use compare::CompareCommand;
pub use config::ConfigCommand;
pub use feature::FeatureCommand;

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use fmc_core::{FeaturesMaximizationMetric, FmcConfig};
use fmc_io::{DatasetFormat, ReadOptions};
use std::path::Path;
use tracing::info;

/// How to read input files; each flag overrides the `[input]` section
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Dataset layout: dense or coordinate
    #[arg(long, short = 'f')]
    pub format: Option<DatasetFormat>,

    /// Label column of dense files
    #[arg(long)]
    pub class_column: Option<String>,

    /// Field delimiter (defaults to tab for .tsv, comma otherwise)
    #[arg(long, short = 'd')]
    pub delimiter: Option<char>,
}

impl InputArgs {
    fn read_options(&self, config: &CliConfig) -> ReadOptions {
        let mut options = config.input.clone();
        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(class_column) = &self.class_column {
            options.class_column = class_column.clone();
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = Some(delimiter);
        }
        options
    }
}

/// Metric parameters; each flag overrides the `[metric]` section
#[derive(Args, Debug, Clone, Default)]
pub struct MetricArgs {
    /// Exponent of the contrast ratio
    #[arg(long, short = 'a')]
    pub amplification: Option<f64>,
}

impl MetricArgs {
    fn metric_config(&self, config: &CliConfig) -> Result<FmcConfig> {
        let mut metric = config.metric_config();
        if let Some(factor) = self.amplification {
            metric.metric.amplification_factor = factor;
        }
        metric.validate()?;
        Ok(metric)
    }
}

/// Read `path` and compute its metric
fn load_metric(
    path: &Path,
    options: &ReadOptions,
    config: &FmcConfig,
) -> Result<FeaturesMaximizationMetric> {
    let dataset = fmc_io::open_file_with(path, options)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let fmc = dataset
        .metric_with(config)
        .with_context(|| format!("Failed to compute the metric of {}", path.display()))?;
    info!(
        path = %path.display(),
        items = dataset.n_items(),
        features = fmc.features().len(),
        classes = fmc.classes().len(),
        selected = fmc.selected_features().len(),
        "metric computed"
    );
    Ok(fmc)
}
