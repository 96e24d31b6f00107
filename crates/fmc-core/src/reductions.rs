//! Weight sum reductions
//!
//! One pass over the stored entries of the weight matrix accumulates:
//!
//! - the total weight of each `(feature, class)` pair
//! - the total weight of each feature over all rows
//! - the total weight of each class over all features
//! - the grand total

use crate::sparse::SparseMatrix;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Aggregated weights of a labelled matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SumReductions {
    /// Shape `(n_features, n_classes)`
    by_feature_and_class: Array2<f64>,
    by_feature: Array1<f64>,
    by_class: Array1<f64>,
    total: f64,
}

impl SumReductions {
    /// Aggregate `matrix`, where `row_classes[r]` is the class position of row `r`
    ///
    /// Callers guarantee `row_classes.len() == matrix.n_rows()` and that every
    /// class position is below `n_classes`.
    pub(crate) fn compute(matrix: &SparseMatrix, row_classes: &[usize], n_classes: usize) -> Self {
        let mut by_feature_and_class = Array2::<f64>::zeros((matrix.n_cols(), n_classes));
        let mut by_feature = Array1::<f64>::zeros(matrix.n_cols());
        let mut by_class = Array1::<f64>::zeros(n_classes);
        let mut total = 0.0;

        for (row, feature, weight) in matrix.iter() {
            let class = row_classes[row];
            by_feature_and_class[[feature, class]] += weight;
            by_feature[feature] += weight;
            by_class[class] += weight;
            total += weight;
        }

        Self {
            by_feature_and_class,
            by_feature,
            by_class,
            total,
        }
    }

    /// Weight of each `(feature, class)` pair
    pub fn by_feature_and_class(&self) -> ArrayView2<'_, f64> {
        self.by_feature_and_class.view()
    }

    /// Weight of each feature over all rows
    pub fn by_feature(&self) -> ArrayView1<'_, f64> {
        self.by_feature.view()
    }

    /// Weight of each class over all features
    pub fn by_class(&self) -> ArrayView1<'_, f64> {
        self.by_class.view()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub(crate) fn n_features(&self) -> usize {
        self.by_feature_and_class.nrows()
    }

    pub(crate) fn n_classes(&self) -> usize {
        self.by_feature_and_class.ncols()
    }
}
