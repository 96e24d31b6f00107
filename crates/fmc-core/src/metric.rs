//! The Features Maximization Metric
//!
//! [`FeaturesMaximizationMetric::new`] runs the whole pipeline once:
//!
//! 1. Sum reductions over the weight matrix
//! 2. Features Recall, Predominance and F-Measure
//! 3. F-Measure Overall Average and Features Selection
//! 4. F-Measure Marginal Averages, Features Contrast and Features Activation
//!
//! The result is read-only. Lookups by name fail with
//! [`FmcError::UnknownFeature`] / [`FmcError::UnknownClass`] outside the
//! vocabularies; whole tables are exposed as immutable `ndarray` views.
//!
//! References: Lamirel J.-C., Cuxac P., Hajlaoui K., *A new approach for
//! feature selection based on quality metric*, Advances in Knowledge Discovery
//! and Management 6, Springer.

use crate::contrast::{self, AmplificationFactor};
use crate::error::{FmcError, FmcResult};
use crate::fmeasure::FMeasureTables;
use crate::reductions::SumReductions;
use crate::selection;
use crate::sparse::SparseMatrix;
use crate::vocabulary::Vocabulary;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// Features Maximization modelization of one labelled dataset
#[derive(Debug, Clone)]
pub struct FeaturesMaximizationMetric {
    features: Vocabulary,
    classes: Vocabulary,
    amplification_factor: AmplificationFactor,
    sums: SumReductions,
    recall: Array2<f64>,
    predominance: Array2<f64>,
    fmeasure: Array2<f64>,
    overall_average: f64,
    selection: Vec<bool>,
    marginal_averages: Array1<f64>,
    contrast: Array2<f64>,
    activation: Array2<bool>,
}

impl FeaturesMaximizationMetric {
    /// Compute the metric with an amplification factor of 1
    ///
    /// - `data_vectors[d, f]` is the weight of feature `f` for data `d`
    /// - `data_classes[d]` is the class of data `d`
    /// - `features[f]` names column `f`
    pub fn new<C, F>(
        data_vectors: &SparseMatrix,
        data_classes: &[C],
        features: &[F],
    ) -> FmcResult<Self>
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        Self::with_amplification(
            data_vectors,
            data_classes,
            features,
            AmplificationFactor::default().value(),
        )
    }

    /// Compute the metric with a custom amplification factor
    ///
    /// Fails with `ShapeMismatch` when the matrix shape disagrees with the
    /// label or feature sequences, `DuplicateFeature` when a feature is named
    /// twice, and `InvalidParameter` when the factor is not a finite positive
    /// number.
    pub fn with_amplification<C, F>(
        data_vectors: &SparseMatrix,
        data_classes: &[C],
        features: &[F],
        amplification_factor: f64,
    ) -> FmcResult<Self>
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        if data_vectors.n_rows() != data_classes.len() {
            return Err(FmcError::ShapeMismatch {
                what: "data_classes",
                expected: data_vectors.n_rows(),
                actual: data_classes.len(),
            });
        }
        if data_vectors.n_cols() != features.len() {
            return Err(FmcError::ShapeMismatch {
                what: "features",
                expected: data_vectors.n_cols(),
                actual: features.len(),
            });
        }
        let amplification_factor = AmplificationFactor::new(amplification_factor)?;
        let features = Vocabulary::from_unique(features)?;
        let classes = Vocabulary::sorted_distinct(data_classes);

        // Every label is in the vocabulary by construction
        let row_classes: Vec<usize> = data_classes
            .iter()
            .filter_map(|label| classes.index_of(label.as_ref()))
            .collect();

        debug!(
            rows = data_vectors.n_rows(),
            features = features.len(),
            classes = classes.len(),
            nnz = data_vectors.nnz(),
            "computing features f-measure"
        );
        let sums = SumReductions::compute(data_vectors, &row_classes, classes.len());
        let FMeasureTables {
            recall,
            predominance,
            fmeasure,
        } = FMeasureTables::compute(&sums);

        let overall_average = selection::overall_average(&fmeasure);
        let selection = selection::select(&fmeasure, overall_average);
        debug!(
            overall_average,
            selected = selection.iter().filter(|&&s| s).count(),
            "computed features selection"
        );

        let marginal_averages = contrast::marginal_averages(&fmeasure);
        let contrast =
            contrast::contrast(&fmeasure, &marginal_averages, &selection, amplification_factor);
        let activation = contrast::activation(&contrast, &selection);
        debug!(
            amplification_factor = amplification_factor.value(),
            active_pairs = activation.iter().filter(|&&a| a).count(),
            "computed features contrast and activation"
        );

        Ok(Self {
            features,
            classes,
            amplification_factor,
            sums,
            recall,
            predominance,
            fmeasure,
            overall_average,
            selection,
            marginal_averages,
            contrast,
            activation,
        })
    }

    // === Vocabularies ===

    /// Feature identifiers in declaration order
    pub fn features(&self) -> &[String] {
        self.features.names()
    }

    /// Class identifiers, sorted
    pub fn classes(&self) -> &[String] {
        self.classes.names()
    }

    pub fn feature_vocabulary(&self) -> &Vocabulary {
        &self.features
    }

    pub fn class_vocabulary(&self) -> &Vocabulary {
        &self.classes
    }

    /// Position of a feature in the tables
    pub fn feature_index(&self, feature: &str) -> FmcResult<usize> {
        self.features
            .index_of(feature)
            .ok_or_else(|| FmcError::UnknownFeature(feature.to_string()))
    }

    /// Position of a class in the tables
    pub fn class_index(&self, class: &str) -> FmcResult<usize> {
        self.classes
            .index_of(class)
            .ok_or_else(|| FmcError::UnknownClass(class.to_string()))
    }

    fn cell(&self, feature: &str, class: &str) -> FmcResult<[usize; 2]> {
        Ok([self.feature_index(feature)?, self.class_index(class)?])
    }

    pub fn amplification_factor(&self) -> f64 {
        self.amplification_factor.value()
    }

    /// Weight aggregates the tables were derived from
    pub fn sums(&self) -> &SumReductions {
        &self.sums
    }

    // === Lookups ===

    /// Features Recall `FR[feature][class]`
    pub fn recall(&self, feature: &str, class: &str) -> FmcResult<f64> {
        Ok(self.recall[self.cell(feature, class)?])
    }

    /// Features Predominance `FP[feature][class]`
    pub fn predominance(&self, feature: &str, class: &str) -> FmcResult<f64> {
        Ok(self.predominance[self.cell(feature, class)?])
    }

    /// Features F-Measure `FM[feature][class]`
    pub fn fmeasure(&self, feature: &str, class: &str) -> FmcResult<f64> {
        Ok(self.fmeasure[self.cell(feature, class)?])
    }

    /// Features Contrast `FC[feature][class]`, 0 for deleted features
    pub fn contrast(&self, feature: &str, class: &str) -> FmcResult<f64> {
        Ok(self.contrast[self.cell(feature, class)?])
    }

    /// Whether `feature` is active for `class`
    pub fn is_active(&self, feature: &str, class: &str) -> FmcResult<bool> {
        Ok(self.activation[self.cell(feature, class)?])
    }

    /// Whether `feature` survived the selection
    pub fn is_selected(&self, feature: &str) -> FmcResult<bool> {
        Ok(self.selection[self.feature_index(feature)?])
    }

    /// F-Measure Marginal Average of `feature`
    pub fn marginal_average(&self, feature: &str) -> FmcResult<f64> {
        Ok(self.marginal_averages[self.feature_index(feature)?])
    }

    /// F-Measure Overall Average, the selection threshold
    pub fn overall_average(&self) -> f64 {
        self.overall_average
    }

    /// Selected features, in declaration order
    pub fn selected_features(&self) -> Vec<&str> {
        self.features_where(true)
    }

    /// Deleted features, in declaration order
    pub fn deleted_features(&self) -> Vec<&str> {
        self.features_where(false)
    }

    fn features_where(&self, selected: bool) -> Vec<&str> {
        self.features
            .iter()
            .filter(|&(f, _)| self.selection[f] == selected)
            .map(|(_, name)| name)
            .collect()
    }

    // === Table views, indexed [feature, class] ===

    pub fn recall_table(&self) -> ArrayView2<'_, f64> {
        self.recall.view()
    }

    pub fn predominance_table(&self) -> ArrayView2<'_, f64> {
        self.predominance.view()
    }

    pub fn fmeasure_table(&self) -> ArrayView2<'_, f64> {
        self.fmeasure.view()
    }

    pub fn contrast_table(&self) -> ArrayView2<'_, f64> {
        self.contrast.view()
    }

    pub fn activation_table(&self) -> ArrayView2<'_, bool> {
        self.activation.view()
    }

    /// Selection flag of each feature, indexed like [`Self::features`]
    pub fn selection_flags(&self) -> &[bool] {
        &self.selection
    }

    pub fn marginal_averages(&self) -> ArrayView1<'_, f64> {
        self.marginal_averages.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> FeaturesMaximizationMetric {
        let weights = SparseMatrix::from_dense(&[
            [9.0, 5.0, 5.0],
            [9.0, 10.0, 5.0],
            [9.0, 20.0, 6.0],
            [5.0, 15.0, 5.0],
            [6.0, 25.0, 6.0],
            [5.0, 25.0, 5.0],
        ])
        .unwrap();
        FeaturesMaximizationMetric::new(
            &weights,
            &["Man", "Man", "Man", "Woman", "Woman", "Woman"],
            &["Shoes size", "Hair size", "Nose size"],
        )
        .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_people_fmeasure() {
        let fmc = people();
        assert_close(fmc.fmeasure("Shoes size", "Man").unwrap(), 0.4462809917355372);
        assert_close(fmc.fmeasure("Shoes size", "Woman").unwrap(), 0.2285714285714286);
        assert_close(fmc.fmeasure("Hair size", "Man").unwrap(), 0.3932584269662921);
        assert_close(fmc.fmeasure("Hair size", "Woman").unwrap(), 0.6598984771573604);
        assert_close(fmc.fmeasure("Nose size", "Man").unwrap(), 0.29090909090909095);
        assert_close(fmc.fmeasure("Nose size", "Woman").unwrap(), 0.24806201550387597);
    }

    #[test]
    fn test_people_selection() {
        let fmc = people();
        assert_close(fmc.overall_average(), 0.3778300718072642);
        assert_eq!(fmc.selected_features(), vec!["Shoes size", "Hair size"]);
        assert_eq!(fmc.deleted_features(), vec!["Nose size"]);
        assert_eq!(fmc.selection_flags(), &[true, true, false]);
    }

    #[test]
    fn test_people_contrast_and_activation() {
        let fmc = people();
        assert_close(fmc.marginal_average("Shoes size").unwrap(), 0.3374262101534829);
        assert_close(fmc.marginal_average("Hair size").unwrap(), 0.5265784520618262);
        assert_close(fmc.marginal_average("Nose size").unwrap(), 0.2694855532064835);

        assert_close(fmc.contrast("Shoes size", "Man").unwrap(), 1.3226032190342898);
        assert_close(fmc.contrast("Shoes size", "Woman").unwrap(), 0.6773967809657103);
        assert_close(fmc.contrast("Hair size", "Man").unwrap(), 0.7468183049011644);
        assert_close(fmc.contrast("Hair size", "Woman").unwrap(), 1.2531816950988357);
        assert_eq!(fmc.contrast("Nose size", "Man").unwrap(), 0.0);
        assert_eq!(fmc.contrast("Nose size", "Woman").unwrap(), 0.0);

        assert!(fmc.is_active("Shoes size", "Man").unwrap());
        assert!(!fmc.is_active("Shoes size", "Woman").unwrap());
        assert!(!fmc.is_active("Hair size", "Man").unwrap());
        assert!(fmc.is_active("Hair size", "Woman").unwrap());
        assert!(!fmc.is_active("Nose size", "Man").unwrap());
        assert!(!fmc.is_active("Nose size", "Woman").unwrap());
    }

    #[test]
    fn test_vocabularies() {
        let fmc = people();
        assert_eq!(fmc.features(), &["Shoes size", "Hair size", "Nose size"]);
        assert_eq!(fmc.classes(), &["Man", "Woman"]);
        assert_eq!(fmc.amplification_factor(), 1.0);
        assert_eq!(fmc.fmeasure_table().dim(), (3, 2));
    }

    #[test]
    fn test_unknown_keys() {
        let fmc = people();
        assert_eq!(
            fmc.recall("Eyes color", "Man").unwrap_err(),
            FmcError::UnknownFeature("Eyes color".to_string())
        );
        assert_eq!(
            fmc.predominance("Hair size", "Child").unwrap_err(),
            FmcError::UnknownClass("Child".to_string())
        );
        assert!(fmc.is_selected("Eyes color").is_err());
    }

    #[test]
    fn test_shape_mismatch_classes() {
        let weights = SparseMatrix::from_dense(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let err = FeaturesMaximizationMetric::new(&weights, &["A"], &["x", "y"]).unwrap_err();
        assert!(matches!(
            err,
            FmcError::ShapeMismatch {
                what: "data_classes",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_shape_mismatch_features() {
        let weights = SparseMatrix::from_dense(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let err =
            FeaturesMaximizationMetric::new(&weights, &["A", "B"], &["x", "y", "z"]).unwrap_err();
        assert!(matches!(err, FmcError::ShapeMismatch { what: "features", .. }));
    }

    #[test]
    fn test_duplicate_feature() {
        let weights = SparseMatrix::from_dense(&[[1.0, 2.0]]).unwrap();
        let err = FeaturesMaximizationMetric::new(&weights, &["A"], &["x", "x"]).unwrap_err();
        assert_eq!(err, FmcError::DuplicateFeature("x".to_string()));
    }

    #[test]
    fn test_invalid_amplification() {
        let weights = SparseMatrix::from_dense(&[[1.0]]).unwrap();
        for factor in [0.0, -1.0, f64::NAN] {
            let err = FeaturesMaximizationMetric::with_amplification(&weights, &["A"], &["x"], factor)
                .unwrap_err();
            assert!(matches!(
                err,
                FmcError::InvalidParameter {
                    name: "amplification_factor",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeaturesMaximizationMetric>();
    }
}
