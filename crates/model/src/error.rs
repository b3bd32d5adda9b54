//! Model error types
//!
//! Defines the standardized error type for all model and scaler operations.

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur during prediction or feature scaling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Feature count of the input does not match the fitted artifact
    #[error("Dimension mismatch: artifact expects {expected} feature(s), matrix has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Invalid parameter value in a deserialized artifact
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let error = ModelError::DimensionMismatch {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: artifact expects 1 feature(s), matrix has 3"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = ModelError::InvalidParameter {
            name: "monthly_offsets".to_string(),
            reason: "must contain 12 entries".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'monthly_offsets': must contain 12 entries"
        );
    }

    #[test]
    fn test_numerical_error_display() {
        let error = ModelError::NumericalError("zero scale in column 0".to_string());
        assert_eq!(error.to_string(), "Numerical error: zero scale in column 0");
    }

    #[test]
    fn test_error_is_clone_and_partial_eq() {
        let error = ModelError::DimensionMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(error.clone(), error);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &ModelError::NumericalError("nan".to_string());
        let _ = error.to_string();
    }

    #[test]
    fn test_result_error_propagation() {
        fn inner() -> Result<i32> {
            Err(ModelError::NumericalError("test".to_string()))
        }

        fn outer() -> Result<i32> {
            inner()?;
            Ok(42)
        }

        assert!(outer().is_err());
    }
}
