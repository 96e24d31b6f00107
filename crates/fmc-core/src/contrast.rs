//! Features Contrast and Features Activation
//!
//! The F-Measure Marginal Average of a feature is its mean F-Measure over all
//! classes. For a selected feature, the contrast with a class is the ratio
//! between the F-Measure and that marginal average, raised to the
//! amplification factor. A selected feature is active for a class when its
//! contrast is above 1.
//!
//! Deleted features, and features whose marginal average is 0, have a contrast
//! of 0 everywhere and are never active.

use crate::error::{FmcError, FmcResult};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Exponent applied to the contrast ratio
///
/// `1` leaves the ratio untouched; larger values sharpen the separation
/// between above-average and below-average classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AmplificationFactor(f64);

impl AmplificationFactor {
    /// Validate a factor: must be finite and strictly positive
    pub fn new(value: f64) -> FmcResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(FmcError::InvalidParameter {
                name: "amplification_factor",
                value: format!("must be a finite positive number (got {})", value),
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Raise a contrast ratio to the factor
    pub fn amplify(&self, ratio: f64) -> f64 {
        if self.0 == 1.0 {
            ratio
        } else {
            ratio.powf(self.0)
        }
    }
}

impl Default for AmplificationFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for AmplificationFactor {
    type Error = FmcError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AmplificationFactor> for f64 {
    fn from(factor: AmplificationFactor) -> Self {
        factor.0
    }
}

/// Per-feature mean F-Measure over classes
pub(crate) fn marginal_averages(fmeasure: &Array2<f64>) -> Array1<f64> {
    let n_classes = fmeasure.ncols();
    fmeasure
        .rows()
        .into_iter()
        .map(|row| {
            if n_classes == 0 {
                0.0
            } else {
                row.iter().sum::<f64>() / n_classes as f64
            }
        })
        .collect()
}

/// Contrast table, 0 for deleted features and null marginal averages
pub(crate) fn contrast(
    fmeasure: &Array2<f64>,
    marginal_averages: &Array1<f64>,
    selection: &[bool],
    factor: AmplificationFactor,
) -> Array2<f64> {
    Array2::from_shape_fn(fmeasure.dim(), |(f, c)| {
        let average = marginal_averages[f];
        if !selection[f] || average == 0.0 {
            0.0
        } else {
            factor.amplify(fmeasure[[f, c]] / average)
        }
    })
}

/// Activation table: selected and contrast above 1
pub(crate) fn activation(contrast: &Array2<f64>, selection: &[bool]) -> Array2<bool> {
    Array2::from_shape_fn(contrast.dim(), |(f, c)| selection[f] && contrast[[f, c]] > 1.0)
}
