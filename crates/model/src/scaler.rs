//! Feature scaler families
//!
//! Fitted transforms applied to the feature matrix before it reaches the
//! model. A missing scaler artifact simply means the raw matrix is used.

use crate::error::{ModelError, Result};
use crate::matrix::FeatureMatrix;
use serde::{Deserialize, Serialize};

/// Common trait for all fitted feature transforms
///
/// `transform` preserves the shape of the input: same row count, same
/// column count.
pub trait Transformer {
    /// Rewrite the matrix column-wise using the fitted parameters
    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix>;
}

/// Standardization: (x - mean) / scale per column
///
/// # Example
///
/// ```rust
/// use model::{FeatureMatrix, StandardScaler, Transformer};
///
/// let scaler = StandardScaler::new(vec![2.0], vec![2.0]).unwrap();
/// let x = FeatureMatrix::from_column(vec![0.0, 2.0, 4.0]);
/// let scaled = scaler.transform(&x).unwrap();
/// assert_eq!(scaled.row(0), &[-1.0]);
/// assert_eq!(scaled.row(2), &[1.0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column mean
    mean: Vec<f64>,
    /// Per-column scale (standard deviation)
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a standard scaler from fitted parameters
    ///
    /// Fails if `mean` and `scale` disagree in length.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(ModelError::InvalidParameter {
                name: "scale".to_string(),
                reason: format!(
                    "expected {} entries to match 'mean', got {}",
                    mean.len(),
                    scale.len()
                ),
            });
        }
        Ok(Self { mean, scale })
    }
}

impl Transformer for StandardScaler {
    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        if x.rows() > 0 && x.cols() != self.mean.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.mean.len(),
                actual: x.cols(),
            });
        }

        x.map_entries(|col, value| {
            let scale = self.scale[col];
            if scale.abs() < f64::EPSILON {
                return Err(ModelError::NumericalError(format!(
                    "zero scale in column {col}"
                )));
            }
            Ok((value - self.mean[col]) / scale)
        })
    }
}

/// Min-max scaling: (x - min) / range per column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Per-column minimum observed during fitting
    data_min: Vec<f64>,
    /// Per-column range (max - min) observed during fitting
    data_range: Vec<f64>,
}

impl MinMaxScaler {
    /// Create a min-max scaler from fitted parameters
    ///
    /// Fails if `data_min` and `data_range` disagree in length.
    pub fn new(data_min: Vec<f64>, data_range: Vec<f64>) -> Result<Self> {
        if data_min.len() != data_range.len() {
            return Err(ModelError::InvalidParameter {
                name: "data_range".to_string(),
                reason: format!(
                    "expected {} entries to match 'data_min', got {}",
                    data_min.len(),
                    data_range.len()
                ),
            });
        }
        Ok(Self {
            data_min,
            data_range,
        })
    }
}

impl Transformer for MinMaxScaler {
    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        if x.rows() > 0 && x.cols() != self.data_min.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.data_min.len(),
                actual: x.cols(),
            });
        }

        x.map_entries(|col, value| {
            let range = self.data_range[col];
            if range.abs() < f64::EPSILON {
                return Err(ModelError::NumericalError(format!(
                    "zero range in column {col}"
                )));
            }
            Ok((value - self.data_min[col]) / range)
        })
    }
}

/// Deserialized scaler artifact
///
/// Tagged union of the transform families the training pipeline can export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    /// Standardization by mean and scale
    Standard(StandardScaler),
    /// Min-max scaling into the fitted range
    MinMax(MinMaxScaler),
}

impl Transformer for ScalerArtifact {
    fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        match self {
            ScalerArtifact::Standard(s) => s.transform(x),
            ScalerArtifact::MinMax(s) => s.transform(x),
        }
    }
}
