//! Similarity between two FMC modelizations
//!
//! Each modelization is represented by the activation of its features: a
//! feature activated for exactly one class is labelled with that class,
//! otherwise it is "not activated". The two labelings are then scored with
//! the clustering metrics homogeneity, completeness and V-measure
//! (Rosenberg & Hirschberg, 2007).
//!
//! Classes may differ between the two modelizations; features may not.

use crate::error::{FmcError, FmcResult};
use crate::metric::FeaturesMaximizationMetric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

const MAX_ROUNDED_DECIMALS: u32 = 15;

/// Homogeneity, completeness and V-measure, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScores {
    pub homogeneity: f64,
    pub completeness: f64,
    pub v_measure: f64,
}

impl ComparisonScores {
    /// Round every score to `decimals` decimal places, ties to even
    ///
    /// Beyond 15 decimals an `f64` in [0, 1] has no digit left to round and
    /// the scores are returned unchanged.
    pub fn rounded(self, decimals: u32) -> Self {
        if decimals > MAX_ROUNDED_DECIMALS {
            return self;
        }
        let scale = 10f64.powi(decimals as i32);
        let round = |x: f64| (x * scale).round_ties_even() / scale;
        Self {
            homogeneity: round(self.homogeneity),
            completeness: round(self.completeness),
            v_measure: round(self.v_measure),
        }
    }
}

/// Activation label of one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ActivationLabel<'a> {
    Class(&'a str),
    /// Distinct from every class of either modelization
    NotActivated,
}

impl<'a> ActivationLabel<'a> {
    fn from_activated(classes: &[&'a str]) -> Self {
        match classes {
            [single] => ActivationLabel::Class(*single),
            _ => ActivationLabel::NotActivated,
        }
    }
}

impl FeaturesMaximizationMetric {
    /// Score the agreement of `self` with `reference`
    ///
    /// `self` provides the predicted labels and `reference` the true ones.
    /// Features activated for exactly one class in neither modelization are
    /// skipped. `rounded` rounds each score to that many decimals.
    pub fn compare(
        &self,
        reference: &FeaturesMaximizationMetric,
        rounded: Option<u32>,
    ) -> FmcResult<ComparisonScores> {
        if self.features() != reference.features() {
            let in_excess = self
                .features()
                .iter()
                .filter(|f| !reference.feature_vocabulary().contains(f))
                .cloned()
                .collect();
            let missing = reference
                .features()
                .iter()
                .filter(|f| !self.feature_vocabulary().contains(f))
                .cloned()
                .collect();
            return Err(FmcError::FeatureMismatch { in_excess, missing });
        }

        let mut predicted = Vec::new();
        let mut truth = Vec::new();
        for feature in reference.features() {
            let own = self.most_activated_classes(feature)?;
            let other = reference.most_activated_classes(feature)?;
            if own.len() != 1 && other.len() != 1 {
                continue;
            }
            predicted.push(ActivationLabel::from_activated(&own));
            truth.push(ActivationLabel::from_activated(&other));
        }
        debug!(
            compared = truth.len(),
            skipped = reference.features().len() - truth.len(),
            "comparing features activation"
        );

        let scores = homogeneity_completeness_v_measure(&truth, &predicted)?;
        Ok(match rounded {
            Some(decimals) => scores.rounded(decimals),
            None => scores,
        })
    }
}

/// Homogeneity, completeness and V-measure (beta = 1) of a clustering
///
/// `labels_true` is the ground truth, `labels_pred` the clustering to
/// evaluate. Entropies use natural logarithms. Empty labelings score 1
/// everywhere.
pub fn homogeneity_completeness_v_measure<T: Eq + Hash>(
    labels_true: &[T],
    labels_pred: &[T],
) -> FmcResult<ComparisonScores> {
    if labels_true.len() != labels_pred.len() {
        return Err(FmcError::ShapeMismatch {
            what: "labels_pred",
            expected: labels_true.len(),
            actual: labels_pred.len(),
        });
    }
    if labels_true.is_empty() {
        return Ok(ComparisonScores {
            homogeneity: 1.0,
            completeness: 1.0,
            v_measure: 1.0,
        });
    }

    let true_counts = counts(labels_true.iter());
    let pred_counts = counts(labels_pred.iter());
    let joint_counts = counts(labels_true.iter().zip(labels_pred.iter()));

    let entropy_true = entropy(&true_counts);
    let entropy_pred = entropy(&pred_counts);
    let mutual_information = mutual_information(
        labels_true.len(),
        &true_counts,
        &pred_counts,
        &joint_counts,
    );

    let homogeneity = if entropy_true == 0.0 {
        1.0
    } else {
        mutual_information / entropy_true
    };
    let completeness = if entropy_pred == 0.0 {
        1.0
    } else {
        mutual_information / entropy_pred
    };
    let v_measure = if homogeneity + completeness == 0.0 {
        0.0
    } else {
        2.0 * homogeneity * completeness / (homogeneity + completeness)
    };

    Ok(ComparisonScores {
        homogeneity,
        completeness,
        v_measure,
    })
}

/// Occurrences of each label, in first-appearance order
fn counts<K: Eq + Hash + Clone>(labels: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut result: Vec<(K, usize)> = Vec::new();
    for label in labels {
        match position.get(&label) {
            Some(&i) => result[i].1 += 1,
            None => {
                position.insert(label.clone(), result.len());
                result.push((label, 1));
            }
        }
    }
    result
}

fn entropy<K>(counts: &[(K, usize)]) -> f64 {
    if counts.len() <= 1 {
        return 0.0;
    }
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let total = total as f64;
    -counts
        .iter()
        .map(|&(_, n)| {
            let n = n as f64;
            (n / total) * (n.ln() - total.ln())
        })
        .sum::<f64>()
}

fn mutual_information<A: Eq + Hash, B: Eq + Hash>(
    n_samples: usize,
    true_counts: &[(A, usize)],
    pred_counts: &[(B, usize)],
    joint_counts: &[((A, B), usize)],
) -> f64 {
    if true_counts.len() == 1 || pred_counts.len() == 1 {
        return 0.0;
    }
    let true_map: HashMap<&A, usize> = true_counts.iter().map(|(k, n)| (k, *n)).collect();
    let pred_map: HashMap<&B, usize> = pred_counts.iter().map(|(k, n)| (k, *n)).collect();
    let total = n_samples as f64;

    let mi: f64 = joint_counts
        .iter()
        .map(|((a, b), n)| {
            let n = *n as f64;
            let share = n / total;
            let outer = (true_map[a] * pred_map[b]) as f64;
            let log_outer = -outer.ln() + total.ln() + total.ln();
            share * (n.ln() - total.ln()) + share * log_outer
        })
        .sum();
    mi.max(0.0)
}
