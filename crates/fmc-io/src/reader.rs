//! Dataset types and file dispatch
//!
//! [`open_file`] picks the reader from the requested [`DatasetFormat`] and the
//! delimiter from the file extension unless [`ReadOptions`] overrides it.

use fmc_core::{FeaturesMaximizationMetric, FmcConfig, FmcError, SparseMatrix};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid weight on line {line}: '{value}'")]
    InvalidWeight { line: u64, value: String },

    #[error("Item '{item}' labelled '{expected}' on a previous line and '{found}' on line {line}")]
    InconsistentClass {
        item: String,
        expected: String,
        found: String,
        line: u64,
    },

    #[error(transparent)]
    Metric(#[from] FmcError),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

impl From<csv::Error> for IoError {
    fn from(err: csv::Error) -> Self {
        IoError::InvalidFormat(err.to_string())
    }
}

/// On-disk layout of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Header row of feature names plus a label column
    #[default]
    Dense,
    /// `item,class,feature,weight` lines
    Coordinate,
}

impl std::fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetFormat::Dense => write!(f, "dense"),
            DatasetFormat::Coordinate => write!(f, "coordinate"),
        }
    }
}

impl std::str::FromStr for DatasetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dense" => Ok(DatasetFormat::Dense),
            "coordinate" | "coo" | "triplets" => Ok(DatasetFormat::Coordinate),
            _ => Err(format!(
                "unknown dataset format '{}' (expected 'dense' or 'coordinate')",
                s
            )),
        }
    }
}

/// How to read a dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    pub format: DatasetFormat,
    /// Label column of dense files
    pub class_column: String,
    /// Field delimiter; inferred from the extension when unset
    pub delimiter: Option<char>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            format: DatasetFormat::Dense,
            class_column: "class".to_string(),
            delimiter: None,
        }
    }
}

impl ReadOptions {
    pub fn new(format: DatasetFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Delimiter byte for `path`: the explicit one, else tab for `.tsv`,
    /// else comma
    pub fn delimiter_for(&self, path: &Path) -> IoResult<u8> {
        match self.delimiter {
            Some(c) if c.is_ascii() => Ok(c as u8),
            Some(c) => Err(IoError::InvalidFormat(format!(
                "delimiter must be a single ASCII character (got '{}')",
                c
            ))),
            None => {
                let extension = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_lowercase())
                    .unwrap_or_default();
                Ok(if extension == "tsv" { b'\t' } else { b',' })
            }
        }
    }
}

/// Construction inputs of a [`FeaturesMaximizationMetric`]
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledDataset {
    /// One row per data vector, one column per feature
    pub matrix: SparseMatrix,
    /// One label per row
    pub classes: Vec<String>,
    /// One identifier per column
    pub features: Vec<String>,
}

impl LabelledDataset {
    pub fn n_items(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn n_features(&self) -> usize {
        self.matrix.n_cols()
    }

    /// Compute the metric with default parameters
    pub fn metric(&self) -> IoResult<FeaturesMaximizationMetric> {
        Ok(FeaturesMaximizationMetric::new(
            &self.matrix,
            &self.classes,
            &self.features,
        )?)
    }

    /// Compute the metric with the parameters of `config`
    pub fn metric_with(&self, config: &FmcConfig) -> IoResult<FeaturesMaximizationMetric> {
        Ok(config.build(&self.matrix, &self.classes, &self.features)?)
    }
}

/// Open a dataset file in `format` with default options
pub fn open_file(path: impl AsRef<Path>, format: DatasetFormat) -> IoResult<LabelledDataset> {
    open_file_with(path, &ReadOptions::new(format))
}

/// Open a dataset file
pub fn open_file_with(path: impl AsRef<Path>, options: &ReadOptions) -> IoResult<LabelledDataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }
    let delimiter = options.delimiter_for(path)?;
    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let reader = BufReader::new(file);

    let dataset = match options.format {
        DatasetFormat::Dense => crate::csv_reader::read_dense(reader, &options.class_column, delimiter)?,
        DatasetFormat::Coordinate => crate::coordinate_reader::read_coordinate(reader, delimiter)?,
    };
    debug!(
        path = %path.display(),
        format = %options.format,
        items = dataset.n_items(),
        features = dataset.n_features(),
        nnz = dataset.matrix.nnz(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse one weight cell; empty means 0
pub(crate) fn parse_weight(cell: &str, line: u64) -> IoResult<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0.0);
    }
    match cell.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(IoError::InvalidWeight {
            line,
            value: cell.to_string(),
        }),
    }
}
