//! Ranking queries over a computed metric
//!
//! - most active features for a class
//! - most activated classes for a feature
//!
//! Results are sorted by descending score. Equal scores are ordered by
//! ascending identifier, so the output never depends on table layout.

use crate::error::FmcResult;
use crate::metric::FeaturesMaximizationMetric;
use serde::{Deserialize, Serialize};

/// Score used to rank features or classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Features Contrast
    #[default]
    Contrast,
    /// Features F-Measure
    FMeasure,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Contrast => write!(f, "contrast"),
            SortBy::FMeasure => write!(f, "fmeasure"),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contrast" => Ok(SortBy::Contrast),
            "fmeasure" | "f-measure" => Ok(SortBy::FMeasure),
            _ => Err(format!(
                "unknown sort criterion '{}' (expected 'contrast' or 'fmeasure')",
                s
            )),
        }
    }
}

/// Options shared by the ranking queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    /// Keep only active `(feature, class)` pairs
    pub activation_only: bool,
    /// Ranking score
    pub sort_by: SortBy,
    /// Truncate the result to this many entries
    pub max_number: Option<usize>,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            activation_only: true,
            sort_by: SortBy::Contrast,
            max_number: None,
        }
    }
}

impl RankingOptions {
    /// Rank everything, active or not
    pub fn all() -> Self {
        Self {
            activation_only: false,
            ..Self::default()
        }
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn max_number(mut self, max_number: usize) -> Self {
        self.max_number = Some(max_number);
        self
    }
}

impl FeaturesMaximizationMetric {
    /// Active features of `class`, by descending contrast
    pub fn most_active_features(&self, class: &str) -> FmcResult<Vec<&str>> {
        self.most_active_features_with(class, &RankingOptions::default())
    }

    /// Features of `class` ranked according to `options`
    pub fn most_active_features_with(
        &self,
        class: &str,
        options: &RankingOptions,
    ) -> FmcResult<Vec<&str>> {
        let c = self.class_index(class)?;
        let scores = self.scores(options.sort_by);
        let activation = self.activation_table();
        let active = activation.column(c);

        let candidates = self
            .feature_vocabulary()
            .iter()
            .filter(|&(f, _)| !options.activation_only || active[f])
            .map(|(f, name)| (scores[[f, c]], name));

        Ok(rank(candidates, options.max_number))
    }

    /// Classes for which `feature` is active, by descending contrast
    pub fn most_activated_classes(&self, feature: &str) -> FmcResult<Vec<&str>> {
        self.most_activated_classes_with(feature, &RankingOptions::default())
    }

    /// Classes of `feature` ranked according to `options`
    pub fn most_activated_classes_with(
        &self,
        feature: &str,
        options: &RankingOptions,
    ) -> FmcResult<Vec<&str>> {
        let f = self.feature_index(feature)?;
        let scores = self.scores(options.sort_by);
        let activation = self.activation_table();
        let active = activation.row(f);

        let candidates = self
            .class_vocabulary()
            .iter()
            .filter(|&(c, _)| !options.activation_only || active[c])
            .map(|(c, name)| (scores[[f, c]], name));

        Ok(rank(candidates, options.max_number))
    }

    fn scores(&self, sort_by: SortBy) -> ndarray::ArrayView2<'_, f64> {
        match sort_by {
            SortBy::Contrast => self.contrast_table(),
            SortBy::FMeasure => self.fmeasure_table(),
        }
    }
}

fn rank<'a>(
    candidates: impl Iterator<Item = (f64, &'a str)>,
    max_number: Option<usize>,
) -> Vec<&'a str> {
    let mut ranked: Vec<(f64, &str)> = candidates.collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    if let Some(max) = max_number {
        ranked.truncate(max);
    }
    ranked.into_iter().map(|(_, name)| name).collect()
}
