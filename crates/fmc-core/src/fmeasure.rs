//! Features Recall, Features Predominance and Features F-Measure
//!
//! For a feature `f` and a class `c`:
//!
//! - `FR[f][c]` = weight of `f` inside `c` / weight of `f` everywhere.
//!   Can `f` distinguish `c` from the other classes?
//! - `FP[f][c]` = weight of `f` inside `c` / weight of every feature inside `c`.
//!   Can `f` identify `c` better than the other features?
//! - `FM[f][c]` = harmonic mean of `FR[f][c]` and `FP[f][c]`.
//!   How much information does `f` carry about `c`?
//!
//! The tables cover the full feature x class grid, zero co-occurrences
//! included. A zero denominator yields 0.

use crate::reductions::SumReductions;
use ndarray::Array2;

/// Recall, Predominance and F-Measure tables, each `(n_features, n_classes)`
#[derive(Debug, Clone)]
pub(crate) struct FMeasureTables {
    pub recall: Array2<f64>,
    pub predominance: Array2<f64>,
    pub fmeasure: Array2<f64>,
}

impl FMeasureTables {
    pub(crate) fn compute(sums: &SumReductions) -> Self {
        let shape = (sums.n_features(), sums.n_classes());
        let joint = sums.by_feature_and_class();
        let by_feature = sums.by_feature();
        let by_class = sums.by_class();

        let recall = Array2::from_shape_fn(shape, |(f, c)| ratio(joint[[f, c]], by_feature[f]));
        let predominance =
            Array2::from_shape_fn(shape, |(f, c)| ratio(joint[[f, c]], by_class[c]));
        let fmeasure = Array2::from_shape_fn(shape, |(f, c)| {
            harmonic_mean(recall[[f, c]], predominance[[f, c]])
        });

        Self {
            recall,
            predominance,
            fmeasure,
        }
    }
}

/// Harmonic mean of two non-negative scores, 0 when both are 0
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    if a + b == 0.0 {
        0.0
    } else {
        2.0 * (a * b) / (a + b)
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
