//! Dense feature matrix
//!
//! The prediction path builds a single-column matrix from the requested month
//! numbers; scalers may rewrite it column-wise before it reaches the model.

use crate::error::{ModelError, Result};

/// Dense row-major `f64` matrix
///
/// # Example
///
/// ```rust
/// use model::FeatureMatrix;
///
/// let x = FeatureMatrix::from_column(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.rows(), 3);
/// assert_eq!(x.cols(), 1);
/// assert_eq!(x.row(1), &[2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    /// Create a matrix from row-major data
    ///
    /// Fails if `data.len()` is not `rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if cols == 0 && rows > 0 {
            return Err(ModelError::InvalidParameter {
                name: "cols".to_string(),
                reason: format!("must be positive for a matrix with {rows} row(s)"),
            });
        }
        if data.len() != rows * cols {
            return Err(ModelError::InvalidParameter {
                name: "data".to_string(),
                reason: format!(
                    "expected {} values for a {}x{} matrix, got {}",
                    rows * cols,
                    rows,
                    cols,
                    data.len()
                ),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create an n×1 matrix from a single feature column
    pub fn from_column(values: Vec<f64>) -> Self {
        let rows = values.len();
        Self {
            data: values,
            rows,
            cols: 1,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `i` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Build a matrix of the same shape by mapping each entry with its column index
    pub fn map_entries<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, f64) -> Result<f64>,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.row_iter() {
            for (col, &value) in row.iter().enumerate() {
                data.push(f(col, value)?);
            }
        }
        Self::new(data, self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_column() {
        let x = FeatureMatrix::from_column(vec![1.0, 2.0, 3.0]);
        assert_eq!(x.rows(), 3);
        assert_eq!(x.cols(), 1);
        assert_eq!(x.row(0), &[1.0]);
        assert_eq!(x.row(2), &[3.0]);
    }

    #[test]
    fn test_from_column_empty() {
        let x = FeatureMatrix::from_column(vec![]);
        assert_eq!(x.rows(), 0);
        assert_eq!(x.cols(), 1);
        assert_eq!(x.row_iter().count(), 0);
    }

    #[test]
    fn test_new_shape_mismatch() {
        let result = FeatureMatrix::new(vec![1.0, 2.0, 3.0], 2, 2);
        assert!(matches!(
            result,
            Err(ModelError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_cols_with_rows() {
        // 5 * 0 == 0 would pass the length check alone, leaving rows()
        // claiming rows that row_iter() never yields.
        let result = FeatureMatrix::new(vec![], 5, 0);
        assert!(matches!(
            result,
            Err(ModelError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_new_allows_fully_empty_matrix() {
        let x = FeatureMatrix::new(vec![], 0, 0).unwrap();
        assert_eq!(x.rows(), 0);
        assert_eq!(x.row_iter().count(), 0);
    }

    #[test]
    fn test_new_multi_column() {
        let x = FeatureMatrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(x.row(0), &[1.0, 2.0]);
        assert_eq!(x.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_row_iter_order() {
        let x = FeatureMatrix::from_column(vec![5.0, 6.0, 7.0]);
        let rows: Vec<&[f64]> = x.row_iter().collect();
        assert_eq!(rows, vec![&[5.0][..], &[6.0][..], &[7.0][..]]);
    }

    #[test]
    fn test_map_entries() {
        let x = FeatureMatrix::from_column(vec![1.0, 2.0]);
        let y = x.map_entries(|_, v| Ok(v * 10.0)).unwrap();
        assert_eq!(y.row(0), &[10.0]);
        assert_eq!(y.row(1), &[20.0]);
        assert_eq!(y.rows(), x.rows());
        assert_eq!(y.cols(), x.cols());
    }

    #[test]
    fn test_map_entries_propagates_error() {
        let x = FeatureMatrix::from_column(vec![1.0]);
        let result = x.map_entries(|_, _| Err(ModelError::NumericalError("bad".to_string())));
        assert!(result.is_err());
    }
}
