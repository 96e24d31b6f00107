//! Error types for fmc-core
//!
//! Construction errors (`ShapeMismatch`, `InvalidParameter`, `DuplicateFeature`,
//! `InvalidWeight`) are fatal: no partial table is ever produced. Lookup errors
//! (`UnknownFeature`, `UnknownClass`) are returned by the query layer.
//!
//! Zero denominators are not errors. A feature or class without weight mass
//! simply scores 0.

use thiserror::Error;

/// Main error type for metric construction and queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FmcError {
    /// Matrix dimensions disagree with the label or feature sequences
    #[error("Inconsistent shapes: {what} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A construction parameter is out of its domain
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// The same identifier names two matrix columns
    #[error("Duplicate feature identifier: '{0}'")]
    DuplicateFeature(String),

    /// A stored weight is negative, NaN or infinite
    #[error("Invalid weight {value} at row {row}, column {column}: weights must be finite and non-negative")]
    InvalidWeight { row: usize, column: usize, value: f64 },

    /// Query for a feature outside the vocabulary
    #[error("Unknown feature: '{0}'")]
    UnknownFeature(String),

    /// Query for a class outside the vocabulary
    #[error("Unknown class: '{0}'")]
    UnknownClass(String),

    /// Two modelizations cannot be compared over different features
    #[error("Feature vocabularies differ (in excess: {in_excess:?}, missing: {missing:?})")]
    FeatureMismatch {
        in_excess: Vec<String>,
        missing: Vec<String>,
    },
}

/// Result type for fmc-core operations
pub type FmcResult<T> = Result<T, FmcError>;
