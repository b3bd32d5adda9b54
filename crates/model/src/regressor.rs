//! Regression model families
//!
//! Concrete regressors deserialized from the exported model artifact.
//! All of them are fitted offline by the training pipeline; at serving time
//! they only expose [`Regressor::predict`].

use crate::error::{ModelError, Result};
use crate::matrix::FeatureMatrix;
use serde::{Deserialize, Serialize};

/// Common trait for all fitted regression models
///
/// Implementations produce exactly one prediction per input row, in row
/// order, and are deterministic: the same matrix always yields the same
/// predictions.
pub trait Regressor {
    /// Predict one value per row of `x`
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>>;

    /// Number of features the model was fitted on
    fn n_features(&self) -> usize;
}

/// Ordinary linear model: y = intercept + coefficients · x
///
/// # Example
///
/// ```rust
/// use model::{FeatureMatrix, LinearModel, Regressor};
///
/// let model = LinearModel::new(10.0, vec![2.0]);
/// let x = FeatureMatrix::from_column(vec![1.0, 2.0, 3.0]);
/// let predictions = model.predict(&x).unwrap();
/// assert_eq!(predictions, vec![12.0, 14.0, 16.0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Y-intercept
    intercept: f64,
    /// One coefficient per feature column
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Create a linear model from fitted parameters
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the fitted coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Regressor for LinearModel {
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        if x.rows() > 0 && x.cols() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: x.cols(),
            });
        }

        let predictions = x
            .row_iter()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(v, c)| v * c)
                        .sum::<f64>()
            })
            .collect();

        Ok(predictions)
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// Linear trend on the month index plus additive month-of-year offsets
///
/// Expects a single-column matrix of month numbers. The offset for a row is
/// selected by the rounded month value modulo 12, so month 13 shares the
/// January offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalLinearModel {
    /// Y-intercept
    intercept: f64,
    /// Trend per month
    slope: f64,
    /// Twelve additive offsets, January first
    monthly_offsets: Vec<f64>,
}

impl SeasonalLinearModel {
    /// Create a seasonal model from fitted parameters
    ///
    /// Fails unless exactly 12 monthly offsets are given.
    pub fn new(intercept: f64, slope: f64, monthly_offsets: Vec<f64>) -> Result<Self> {
        if monthly_offsets.len() != 12 {
            return Err(ModelError::InvalidParameter {
                name: "monthly_offsets".to_string(),
                reason: format!("must contain 12 entries, got {}", monthly_offsets.len()),
            });
        }

        Ok(Self {
            intercept,
            slope,
            monthly_offsets,
        })
    }

    /// Get the monthly offsets, January first
    pub fn monthly_offsets(&self) -> &[f64] {
        &self.monthly_offsets
    }

    fn offset_for(&self, month: f64) -> Result<f64> {
        if !month.is_finite() {
            return Err(ModelError::NumericalError(format!(
                "non-finite month value {month}"
            )));
        }
        let idx = (month.round() as i64 - 1).rem_euclid(12) as usize;
        Ok(self.monthly_offsets[idx])
    }
}

impl Regressor for SeasonalLinearModel {
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        if x.rows() > 0 && x.cols() != 1 {
            return Err(ModelError::DimensionMismatch {
                expected: 1,
                actual: x.cols(),
            });
        }
        if self.monthly_offsets.len() != 12 {
            return Err(ModelError::InvalidParameter {
                name: "monthly_offsets".to_string(),
                reason: format!("must contain 12 entries, got {}", self.monthly_offsets.len()),
            });
        }

        let mut predictions = Vec::with_capacity(x.rows());
        for row in x.row_iter() {
            let month = row[0];
            predictions.push(self.intercept + self.slope * month + self.offset_for(month)?);
        }

        Ok(predictions)
    }

    fn n_features(&self) -> usize {
        1
    }
}

/// Deserialized model artifact
///
/// Tagged union of the regressor families the training pipeline can export.
/// The `kind` field in the JSON document selects the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Ordinary linear model
    Linear(LinearModel),
    /// Linear trend with month-of-year offsets
    SeasonalLinear(SeasonalLinearModel),
}

impl Regressor for ModelArtifact {
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        match self {
            ModelArtifact::Linear(m) => m.predict(x),
            ModelArtifact::SeasonalLinear(m) => m.predict(x),
        }
    }

    fn n_features(&self) -> usize {
        match self {
            ModelArtifact::Linear(m) => m.n_features(),
            ModelArtifact::SeasonalLinear(m) => m.n_features(),
        }
    }
}
