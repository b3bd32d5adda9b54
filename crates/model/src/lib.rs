//! Regression model and feature-scaling primitives
//!
//! This crate defines the in-memory shape of the serialized artifacts the
//! forecast service works with, organized by concern:
//!
//! - [`matrix`]: the dense feature matrix fed to models and scalers
//! - [`regressor`]: the [`Regressor`] contract and concrete model families
//! - [`scaler`]: the [`Transformer`] contract and concrete scaler families
//!
//! Models and scalers are immutable after deserialization and deterministic,
//! so a loaded artifact can be shared read-only across concurrent requests.
//!
//! ## Example
//!
//! ```rust
//! use model::prelude::*;
//!
//! let model = LinearModel::new(100.0, vec![2.5]);
//! let x = FeatureMatrix::from_column(vec![1.0, 2.0, 3.0]);
//! let predictions = model.predict(&x).unwrap();
//! assert_eq!(predictions.len(), 3);
//! ```

mod error;
pub mod matrix;
pub mod regressor;
pub mod scaler;

pub use error::{ModelError, Result};
pub use matrix::FeatureMatrix;
pub use regressor::{LinearModel, ModelArtifact, Regressor, SeasonalLinearModel};
pub use scaler::{MinMaxScaler, ScalerArtifact, StandardScaler, Transformer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::matrix::FeatureMatrix;
    pub use crate::regressor::{LinearModel, ModelArtifact, Regressor, SeasonalLinearModel};
    pub use crate::scaler::{MinMaxScaler, ScalerArtifact, StandardScaler, Transformer};
    pub use crate::{ModelError, Result};
}
