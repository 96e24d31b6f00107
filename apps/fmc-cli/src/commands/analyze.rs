//! `fmc analyze`

use super::{load_metric, InputArgs, MetricArgs};
use crate::config::CliConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use fmc_core::{FeaturesMaximizationMetric, RankingOptions, SortBy};
use std::fmt::Write;
use std::path::PathBuf;

/// Analyze a labelled dataset
///
/// ```bash
/// fmc analyze people.csv --sort-by fmeasure --top 5
/// ```
#[derive(Args, Debug, Clone)]
pub struct AnalyzeCommand {
    /// Dataset file
    pub input: PathBuf,

    #[command(flatten)]
    pub input_args: InputArgs,

    #[command(flatten)]
    pub metric_args: MetricArgs,

    /// Ranking score: contrast or fmeasure
    #[arg(long, short = 's')]
    pub sort_by: Option<SortBy>,

    /// List inactive features too
    #[arg(long)]
    pub all: bool,

    /// Keep at most N features per class
    #[arg(long, short = 'n', value_name = "N")]
    pub top: Option<usize>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeCommand {
    pub fn run(&self, config: &CliConfig) -> Result<String> {
        let metric_config = self.metric_args.metric_config(config)?;
        let options = self.input_args.read_options(config);
        let fmc = load_metric(&self.input, &options, &metric_config)?;

        if self.json {
            let mut json = fmc.report().to_json()?;
            json.push('\n');
            return Ok(json);
        }
        render(&fmc, &self.ranking(config))
    }

    fn ranking(&self, config: &CliConfig) -> RankingOptions {
        let mut ranking = config.ranking.clone();
        if let Some(sort_by) = self.sort_by {
            ranking.sort_by = sort_by;
        }
        if self.all {
            ranking.activation_only = false;
        }
        if let Some(top) = self.top {
            ranking.max_number = Some(top);
        }
        ranking
    }
}

fn render(fmc: &FeaturesMaximizationMetric, ranking: &RankingOptions) -> Result<String> {
    let mut out = String::new();
    let deleted = fmc.deleted_features();
    if deleted.is_empty() {
        writeln!(out, "Deleted features: none")?;
    } else {
        writeln!(out, "Deleted features: {}", deleted.join(", "))?;
    }
    writeln!(out, "Overall average F-Measure: {:.4}", fmc.overall_average())?;

    for class in fmc.classes() {
        writeln!(out, "\nClass {}", class)?;
        let features = fmc.most_active_features_with(class, ranking)?;
        if features.is_empty() {
            writeln!(out, "  no active feature")?;
            continue;
        }

        let mut table = output::table(["Feature", "F-Measure", "Contrast", "Active"]);
        for feature in features {
            table.add_row(vec![
                output::name(feature),
                output::score(fmc.fmeasure(feature, class)?),
                output::score(fmc.contrast(feature, class)?),
                output::flag(fmc.is_active(feature, class)?),
            ]);
        }
        writeln!(out, "{}", table)?;
    }
    Ok(out)
}
