//! `fmc feature`

use super::{load_metric, InputArgs, MetricArgs};
use crate::config::CliConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use fmc_core::FeaturesMaximizationMetric;
use std::fmt::Write;
use std::path::PathBuf;

/// Scores of one feature in every class
#[derive(Args, Debug, Clone)]
pub struct FeatureCommand {
    /// Dataset file
    pub input: PathBuf,

    /// Feature identifier
    pub feature: String,

    #[command(flatten)]
    pub input_args: InputArgs,

    #[command(flatten)]
    pub metric_args: MetricArgs,

    /// Print the feature report as JSON
    #[arg(long)]
    pub json: bool,
}

impl FeatureCommand {
    pub fn run(&self, config: &CliConfig) -> Result<String> {
        let metric_config = self.metric_args.metric_config(config)?;
        let options = self.input_args.read_options(config);
        let fmc = load_metric(&self.input, &options, &metric_config)?;
        // Fails early on an unknown feature
        let selected = fmc.is_selected(&self.feature)?;

        if self.json {
            let report = fmc.report();
            let mut json = serde_json::to_string_pretty(&report.feature(&self.feature))?;
            json.push('\n');
            return Ok(json);
        }
        render(&fmc, &self.feature, selected)
    }
}

fn render(fmc: &FeaturesMaximizationMetric, feature: &str, selected: bool) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Feature {} ({})",
        feature,
        if selected { "selected" } else { "deleted" }
    )?;
    writeln!(
        out,
        "Marginal average F-Measure: {:.4} (overall {:.4})",
        fmc.marginal_average(feature)?,
        fmc.overall_average()
    )?;
    let activated = fmc.most_activated_classes(feature)?;
    if activated.is_empty() {
        writeln!(out, "Activated classes: none")?;
    } else {
        writeln!(out, "Activated classes: {}", activated.join(", "))?;
    }

    let mut table = output::table(["Class", "Recall", "Predominance", "F-Measure", "Contrast", "Active"]);
    for class in fmc.classes() {
        table.add_row(vec![
            output::name(class),
            output::score(fmc.recall(feature, class)?),
            output::score(fmc.predominance(feature, class)?),
            output::score(fmc.fmeasure(feature, class)?),
            output::score(fmc.contrast(feature, class)?),
            output::flag(fmc.is_active(feature, class)?),
        ]);
    }
    writeln!(out, "{}", table)?;
    Ok(out)
}
