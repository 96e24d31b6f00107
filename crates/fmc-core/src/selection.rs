//! Features Selection
//!
//! The F-Measure Overall Average is the mean F-Measure over every
//! `(feature, class)` pair. A feature is selected when at least one of its
//! F-Measures is strictly above it; otherwise it is deleted. Equality with the
//! average counts as not exceeding it.

use ndarray::Array2;

/// Mean of every cell of the F-Measure table, 0 for an empty table
pub(crate) fn overall_average(fmeasure: &Array2<f64>) -> f64 {
    if fmeasure.is_empty() {
        return 0.0;
    }
    // Row-major sequential sum so results do not depend on memory layout
    let sum: f64 = fmeasure.iter().sum();
    sum / fmeasure.len() as f64
}

/// Per-feature selection flags
pub(crate) fn select(fmeasure: &Array2<f64>, overall_average: f64) -> Vec<bool> {
    fmeasure
        .rows()
        .into_iter()
        .map(|row| row.iter().any(|&fm| fm > overall_average))
        .collect()
}
