//! Dense linear system solver with outcome classification
//!
//! This crate solves small-to-moderate square systems `Ax = b` by Gaussian
//! elimination with partial pivoting and classifies every call into exactly
//! one [`SolutionStatus`].
//!
//! # Features
//!
//! - **Classification**: unique, inconsistent, underdetermined, or error
//! - **Verification**: unique solutions are re-checked against the original
//!   equations before being returned
//! - **Determinant**: elimination-based, with a tagged [`Determinant`] result
//!   and a legacy `0.0`-on-failure variant
//! - **Tolerances**: absolute by default, optionally relative to the largest
//!   coefficient ([`SolverConfig`])
//!
//! # Example
//!
//! ```
//! use math_audio_linear_system::{SolutionStatus, calculate_determinant, solve};
//!
//! let a = vec![vec![2.0, 3.0], vec![1.0, -1.0]];
//! let b = vec![7.0, 1.0];
//!
//! let solution = solve(&a, &b);
//! assert_eq!(solution.status(), SolutionStatus::UniqueSolution);
//! assert!((solution.values()[0] - 2.0).abs() < 1e-10);
//!
//! assert_eq!(calculate_determinant(&[vec![1.0, 2.0], vec![2.0, 4.0]]), 0.0);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod residual;
pub mod solution;

pub use config::{
    DEFAULT_EPSILON, DEFAULT_VERIFICATION_FACTOR, SolverConfig, Thresholds, ToleranceMode,
};
pub use error::{LinearSystemError, Result};
pub use solution::{Solution, SolutionStatus};

// Re-export direct solvers
pub use direct::{
    Determinant, calculate_determinant, determinant, determinant_array, determinant_with_config,
    solve, solve_array, solve_with_config, try_solve, try_solve_with_config,
};

pub use matrix::{square_order, validate_system};
pub use residual::{max_residual, residuals};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
