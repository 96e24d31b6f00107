//! `fmc compare`

use super::{load_metric, InputArgs, MetricArgs};
use crate::config::CliConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Compare the activation of the same features under two labelings
///
/// `INPUT` is scored against `REFERENCE`, taken as the ground truth.
#[derive(Args, Debug, Clone)]
pub struct CompareCommand {
    /// Dataset to evaluate
    pub input: PathBuf,

    /// Reference dataset, with the same features
    pub reference: PathBuf,

    #[command(flatten)]
    pub input_args: InputArgs,

    #[command(flatten)]
    pub metric_args: MetricArgs,

    /// Round the scores to D decimals
    #[arg(long, value_name = "D")]
    pub rounded: Option<u32>,

    /// Print the scores as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompareCommand {
    pub fn run(&self, config: &CliConfig) -> Result<String> {
        let metric_config = self.metric_args.metric_config(config)?;
        let options = self.input_args.read_options(config);
        let fmc = load_metric(&self.input, &options, &metric_config)?;
        let reference = load_metric(&self.reference, &options, &metric_config)?;

        let scores = fmc.compare(&reference, self.rounded)?;
        if self.json {
            let mut json = serde_json::to_string_pretty(&scores)?;
            json.push('\n');
            return Ok(json);
        }

        let mut table = output::table(["Score", "Value"]);
        table.add_row(vec![output::name("homogeneity"), output::score(scores.homogeneity)]);
        table.add_row(vec![output::name("completeness"), output::score(scores.completeness)]);
        table.add_row(vec![output::name("v-measure"), output::score(scores.v_measure)]);
        Ok(format!("{}\n", table))
    }
}
