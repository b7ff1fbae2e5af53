//! Shape validation and conversions for row-major input

use crate::error::{LinearSystemError, Result};
use ndarray::Array2;

/// Check that `matrix` is non-empty and square, returning its order
pub fn square_order(matrix: &[Vec<f64>]) -> Result<usize> {
    let n = matrix.len();
    if n == 0 {
        return Err(LinearSystemError::EmptyCoefficients);
    }
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != n {
            return Err(LinearSystemError::NotSquare {
                row,
                expected: n,
                got: values.len(),
            });
        }
    }
    Ok(n)
}

/// Validate a system `Ax = b`, returning the number of unknowns
///
/// Checks emptiness and the constants length before squareness, then
/// rejects NaN and infinite entries.
pub fn validate_system(coefficients: &[Vec<f64>], constants: &[f64]) -> Result<usize> {
    if coefficients.is_empty() {
        return Err(LinearSystemError::EmptyCoefficients);
    }
    if constants.is_empty() {
        return Err(LinearSystemError::EmptyConstants);
    }
    if coefficients.len() != constants.len() {
        return Err(LinearSystemError::DimensionMismatch {
            expected: coefficients.len(),
            got: constants.len(),
        });
    }
    let n = square_order(coefficients)?;
    check_finite(coefficients)?;
    if let Some(row) = constants.iter().position(|b| !b.is_finite()) {
        return Err(LinearSystemError::NonFinite { row, col: n });
    }
    Ok(n)
}

pub(crate) fn check_finite(matrix: &[Vec<f64>]) -> Result<()> {
    for (row, values) in matrix.iter().enumerate() {
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(LinearSystemError::NonFinite { row, col });
        }
    }
    Ok(())
}

/// Largest absolute entry (`0.0` for an empty matrix)
pub(crate) fn max_abs_entry(matrix: &[Vec<f64>]) -> f64 {
    matrix
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

/// Owned `n x n` working copy; `matrix` must already be validated as square
pub(crate) fn to_array(matrix: &[Vec<f64>], n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| matrix[i][j])
}

/// Owned `n x (n + 1)` augmented matrix `[A | b]`
pub(crate) fn augment(coefficients: &[Vec<f64>], constants: &[f64], n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n + 1), |(i, j)| {
        if j < n { coefficients[i][j] } else { constants[i] }
    })
}

/// Row-major copy of an ndarray matrix
pub(crate) fn rows_of(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
