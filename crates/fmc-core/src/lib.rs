//! fmc-core - Features Maximization Metric
//!
//! This crate computes the Features Maximization Metric over a labelled,
//! sparse feature-weight matrix:
//!
//! - **Recall / Predominance / F-Measure**: how much information each feature
//!   carries about each class
//! - **Selection**: features whose F-Measure exceeds the overall average for
//!   at least one class
//! - **Contrast / Activation**: for selected features, which classes they
//!   distinguish, relative to the feature's marginal average
//!
//! # Design
//!
//! All tables are computed once in [`FeaturesMaximizationMetric::new`] and
//! never mutated afterwards. They are stored as dense `ndarray` tables indexed
//! by `(feature, class)` position, with name lookups going through a
//! [`Vocabulary`]. A built metric is `Send + Sync` and can be queried from
//! several threads at once.
//!
//! # Example
//!
//! ```
//! use fmc_core::{FeaturesMaximizationMetric, SparseMatrix};
//!
//! let weights = SparseMatrix::from_dense(&[
//!     [9.0, 5.0, 5.0],
//!     [9.0, 10.0, 5.0],
//!     [9.0, 20.0, 6.0],
//!     [5.0, 15.0, 5.0],
//!     [6.0, 25.0, 6.0],
//!     [5.0, 25.0, 5.0],
//! ])
//! .unwrap();
//! let genders = ["Man", "Man", "Man", "Woman", "Woman", "Woman"];
//! let characteristics = ["Shoes size", "Hair size", "Nose size"];
//!
//! let fmc = FeaturesMaximizationMetric::new(&weights, &genders, &characteristics).unwrap();
//!
//! assert!(!fmc.is_selected("Nose size").unwrap());
//! assert_eq!(fmc.most_active_features("Man").unwrap(), vec!["Shoes size"]);
//! assert_eq!(fmc.most_active_features("Woman").unwrap(), vec!["Hair size"]);
//! ```

pub mod compare;
pub mod config;
pub mod contrast;
pub mod error;
pub mod fmeasure;
pub mod metric;
pub mod query;
pub mod reductions;
pub mod report;
pub mod selection;
pub mod sparse;
pub mod vocabulary;

pub use compare::{homogeneity_completeness_v_measure, ComparisonScores};
pub use config::{ConfigError, FmcConfig, MetricConfig};
pub use contrast::AmplificationFactor;
pub use error::{FmcError, FmcResult};
pub use fmeasure::harmonic_mean;
pub use metric::FeaturesMaximizationMetric;
pub use query::{RankingOptions, SortBy};
pub use reductions::SumReductions;
pub use report::{ClassScore, FeatureReport, FmcReport};
pub use sparse::SparseMatrix;
pub use vocabulary::Vocabulary;
