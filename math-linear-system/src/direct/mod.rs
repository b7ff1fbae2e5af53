//! Direct solvers for dense systems
//!
//! This module provides elimination-based routines:
//! - [`solve`]: Gaussian elimination with partial pivoting, outcome
//!   classification and verification of the computed values
//! - [`determinant`]: elimination-based determinant with a tagged result

mod determinant;
mod gauss;

pub use determinant::{
    Determinant, calculate_determinant, determinant, determinant_array, determinant_with_config,
};
pub use gauss::{solve, solve_array, solve_with_config, try_solve, try_solve_with_config};

use ndarray::Array2;

/// Partial pivot search in column `col`, rows `start..`
///
/// Returns the row holding the largest magnitude and that magnitude. Ties keep
/// the topmost row.
fn find_pivot(matrix: &Array2<f64>, col: usize, start: usize) -> (usize, f64) {
    let mut pivot_row = start;
    let mut max_abs = matrix[[start, col]].abs();

    for i in (start + 1)..matrix.nrows() {
        let value = matrix[[i, col]].abs();
        if value > max_abs {
            max_abs = value;
            pivot_row = i;
        }
    }

    (pivot_row, max_abs)
}

fn swap_rows(matrix: &mut Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}
