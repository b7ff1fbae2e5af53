//! Error types for dense linear systems

use thiserror::Error;

/// Errors reported by the typed entry points ([`crate::try_solve`],
/// [`crate::determinant`], [`crate::residuals`], [`crate::SolverConfig::from_json`]).
///
/// The untyped entry points ([`crate::solve`], [`crate::calculate_determinant`])
/// never surface these; they fold them into a status or a `0.0`.
#[derive(Error, Debug)]
pub enum LinearSystemError {
    #[error("Coefficient matrix is empty")]
    EmptyCoefficients,
    #[error("Constants vector is empty")]
    EmptyConstants,
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Matrix is not square: row {row} has {got} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Non-finite value at row {row}, column {col}")]
    NonFinite { row: usize, col: usize },
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinearSystemError>;
