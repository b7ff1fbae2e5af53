//! Gaussian elimination with partial pivoting
//!
//! Solves a square system `Ax = b` and classifies the outcome. The working
//! copy is an owned augmented matrix `[A | b]`; caller data is only read.
//!
//! Elimination normalizes each pivot row to a leading 1 and clears the
//! entries below it. Columns without a usable pivot are skipped without
//! advancing the rank. Afterwards:
//! - a remaining row `0 = c` with `c != 0` means no solution,
//! - fewer pivots than unknowns means infinitely many solutions,
//! - otherwise back substitution yields the values, which are checked
//!   against the original equations before being returned.

use super::{find_pivot, swap_rows};
use crate::config::{SolverConfig, Thresholds};
use crate::error::Result;
use crate::matrix::{augment, max_abs_entry, rows_of, validate_system};
use crate::residual::residuals_unchecked;
use crate::solution::Solution;
use ndarray::{Array1, Array2, Axis};

/// Outcome of forward elimination
struct Elimination {
    rank: usize,
    /// Pivot column chosen at each elimination step
    pivot_columns: Vec<Option<usize>>,
}

/// Solve `Ax = b` with the default absolute tolerances
///
/// Malformed input (empty, size mismatch, non-square, non-finite) yields
/// [`SolutionStatus::CalculationError`](crate::SolutionStatus::CalculationError).
pub fn solve(coefficients: &[Vec<f64>], constants: &[f64]) -> Solution {
    solve_with_config(coefficients, constants, &SolverConfig::default())
}

/// Solve `Ax = b` with the given tolerance configuration
pub fn solve_with_config(
    coefficients: &[Vec<f64>],
    constants: &[f64],
    config: &SolverConfig,
) -> Solution {
    match try_solve_with_config(coefficients, constants, config) {
        Ok(solution) => solution,
        Err(err) => {
            log::debug!("Rejected linear system: {}", err);
            Solution::calculation_error()
        }
    }
}

/// Solve an ndarray system `Ax = b` with the default tolerances
pub fn solve_array(a: &Array2<f64>, b: &Array1<f64>) -> Solution {
    solve(&rows_of(a), &b.to_vec())
}

/// Like [`solve`], but malformed input is reported as an error
pub fn try_solve(coefficients: &[Vec<f64>], constants: &[f64]) -> Result<Solution> {
    try_solve_with_config(coefficients, constants, &SolverConfig::default())
}

/// Like [`solve_with_config`], but malformed input or configuration is
/// reported as an error
pub fn try_solve_with_config(
    coefficients: &[Vec<f64>],
    constants: &[f64],
    config: &SolverConfig,
) -> Result<Solution> {
    config.validate()?;
    let n = validate_system(coefficients, constants)?;
    let thresholds = config.thresholds(max_abs_entry(coefficients));

    let mut augmented = augment(coefficients, constants, n);
    let elimination = forward_eliminate(&mut augmented, thresholds.zero);
    log::debug!("Eliminated {}x{} system: rank {}", n, n, elimination.rank);

    // Rows without a pivot are all zero on the left; their constant must be too
    if let Some(row) =
        (elimination.rank..n).find(|&i| augmented[[i, n]].abs() >= thresholds.zero)
    {
        log::debug!(
            "Inconsistent system: row {} reduces to 0 = {:e}",
            row,
            augmented[[row, n]]
        );
        return Ok(Solution::no_solution());
    }

    if elimination.rank < n {
        log::debug!(
            "Underdetermined system: {} free variable(s)",
            n - elimination.rank
        );
        return Ok(Solution::infinite_solutions());
    }

    let values = back_substitute(&augmented, &elimination);

    if !verify(coefficients, constants, &values, &thresholds) {
        return Ok(Solution::calculation_error());
    }

    Ok(Solution::unique(values))
}

/// Reduce `augmented` (n x (n + 1)) to row-echelon form with unit pivots
///
/// A pivot must exceed `zero`; an entry below it counts as already cleared.
fn forward_eliminate(augmented: &mut Array2<f64>, zero: f64) -> Elimination {
    let n = augmented.nrows();
    let mut pivot_columns = vec![None; n];
    let mut rank = 0;

    for col in 0..n {
        if rank == n {
            break;
        }

        let (pivot_row, magnitude) = find_pivot(augmented, col, rank);
        if magnitude <= zero {
            log::trace!("Column {}: no usable pivot below row {}", col, rank);
            continue;
        }

        swap_rows(augmented, rank, pivot_row);
        pivot_columns[rank] = Some(col);
        log::trace!(
            "Step {}: pivot {:e} from row {} in column {}",
            rank,
            augmented[[rank, col]],
            pivot_row,
            col
        );

        let pivot = augmented[[rank, col]];
        augmented.row_mut(rank).mapv_inplace(|v| v / pivot);

        let (top, mut bottom) = augmented.view_mut().split_at(Axis(0), rank + 1);
        let pivot_row = top.row(rank);
        for mut row in bottom.rows_mut() {
            let factor = row[col];
            if factor.abs() < zero {
                continue;
            }
            row.scaled_add(-factor, &pivot_row);
        }

        rank += 1;
    }

    Elimination {
        rank,
        pivot_columns,
    }
}

fn back_substitute(augmented: &Array2<f64>, elimination: &Elimination) -> Vec<f64> {
    let n = augmented.nrows();
    let mut values = vec![0.0; n];

    for step in (0..elimination.rank).rev() {
        let Some(col) = elimination.pivot_columns[step] else {
            continue;
        };

        values[col] = augmented[[step, n]];
        for j in (col + 1)..n {
            values[col] -= augmented[[step, j]] * values[j];
        }
    }

    values
}

/// Substitute `values` into the original equations
///
/// NaN residuals fail the check.
fn verify(
    coefficients: &[Vec<f64>],
    constants: &[f64],
    values: &[f64],
    thresholds: &Thresholds,
) -> bool {
    let residuals = residuals_unchecked(coefficients, constants, values);
    match residuals
        .iter()
        .position(|r| !(r.abs() <= thresholds.verification))
    {
        Some(row) => {
            log::warn!(
                "Discarding computed solution: equation {} residual {:e} exceeds {:e}",
                row,
                residuals[row],
                thresholds.verification
            );
            false
        }
        None => true,
    }
}
