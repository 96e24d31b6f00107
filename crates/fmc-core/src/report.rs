//! Serializable snapshot of a computed metric

use crate::metric::FeaturesMaximizationMetric;
use serde::{Deserialize, Serialize};

/// Every table of a [`FeaturesMaximizationMetric`], keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FmcReport {
    pub features: Vec<String>,
    pub classes: Vec<String>,
    pub amplification_factor: f64,
    pub overall_average: f64,
    /// One entry per feature, in declaration order
    pub scores: Vec<FeatureReport>,
}

/// Scores of one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub feature: String,
    pub selected: bool,
    pub marginal_average: f64,
    /// One entry per class, in class order
    pub classes: Vec<ClassScore>,
}

/// Scores of one `(feature, class)` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class: String,
    pub recall: f64,
    pub predominance: f64,
    pub fmeasure: f64,
    pub contrast: f64,
    pub active: bool,
}

impl FmcReport {
    /// Scores of one feature
    pub fn feature(&self, feature: &str) -> Option<&FeatureReport> {
        self.scores.iter().find(|r| r.feature == feature)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

impl FeaturesMaximizationMetric {
    /// Snapshot every table
    pub fn report(&self) -> FmcReport {
        let recall = self.recall_table();
        let predominance = self.predominance_table();
        let fmeasure = self.fmeasure_table();
        let contrast = self.contrast_table();
        let activation = self.activation_table();
        let marginal_averages = self.marginal_averages();

        let scores = self
            .feature_vocabulary()
            .iter()
            .map(|(f, feature)| FeatureReport {
                feature: feature.to_string(),
                selected: self.selection_flags()[f],
                marginal_average: marginal_averages[f],
                classes: self
                    .class_vocabulary()
                    .iter()
                    .map(|(c, class)| ClassScore {
                        class: class.to_string(),
                        recall: recall[[f, c]],
                        predominance: predominance[[f, c]],
                        fmeasure: fmeasure[[f, c]],
                        contrast: contrast[[f, c]],
                        active: activation[[f, c]],
                    })
                    .collect(),
            })
            .collect();

        FmcReport {
            features: self.features().to_vec(),
            classes: self.classes().to_vec(),
            amplification_factor: self.amplification_factor(),
            overall_average: self.overall_average(),
            scores,
        }
    }
}
