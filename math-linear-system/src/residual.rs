//! Residual diagnostics for candidate solutions

use crate::error::{LinearSystemError, Result};
use crate::matrix::validate_system;

/// Per-equation residuals `sum_j a_ij * x_j - b_i`
pub fn residuals(coefficients: &[Vec<f64>], constants: &[f64], values: &[f64]) -> Result<Vec<f64>> {
    let n = validate_system(coefficients, constants)?;
    if values.len() != n {
        return Err(LinearSystemError::DimensionMismatch {
            expected: n,
            got: values.len(),
        });
    }
    Ok(residuals_unchecked(coefficients, constants, values))
}

/// Largest absolute residual; NaN if any residual is NaN
pub fn max_residual(coefficients: &[Vec<f64>], constants: &[f64], values: &[f64]) -> Result<f64> {
    let residuals = residuals(coefficients, constants, values)?;
    Ok(residuals.iter().fold(0.0_f64, |acc, r| {
        if acc.is_nan() || r.is_nan() {
            f64::NAN
        } else {
            acc.max(r.abs())
        }
    }))
}

pub(crate) fn residuals_unchecked(
    coefficients: &[Vec<f64>],
    constants: &[f64],
    values: &[f64],
) -> Vec<f64> {
    coefficients
        .iter()
        .zip(constants)
        .map(|(row, &b)| {
            let mut sum = 0.0;
            for (a, x) in row.iter().zip(values) {
                sum += a * x;
            }
            sum - b
        })
        .collect()
}
