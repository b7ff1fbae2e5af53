//! Elimination-based determinant
//!
//! Uses the same partial pivoting and zero threshold as the solver, but
//! without an augmented column or pivot normalization: the determinant is the
//! product of the pivots, negated once per row swap.

use super::{find_pivot, swap_rows};
use crate::config::SolverConfig;
use crate::error::Result;
use crate::matrix::{check_finite, max_abs_entry, rows_of, square_order, to_array};
use ndarray::{Array2, Axis, s};
use serde::{Deserialize, Serialize};

/// Determinant of a well-formed square matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Determinant {
    /// A pivot column fell below the zero threshold
    Singular,
    /// Product of the pivots
    Value(f64),
}

impl Determinant {
    /// Numeric value, with `Singular` mapped to `0.0`
    pub fn value(self) -> f64 {
        match self {
            Determinant::Singular => 0.0,
            Determinant::Value(v) => v,
        }
    }

    pub fn is_singular(self) -> bool {
        matches!(self, Determinant::Singular)
    }
}

/// Determinant with every degenerate case collapsed to `0.0`
///
/// Empty, non-square and non-finite input, as well as singular matrices, all
/// return `0.0`. Use [`determinant`] to tell them apart.
pub fn calculate_determinant(matrix: &[Vec<f64>]) -> f64 {
    match determinant(matrix) {
        Ok(det) => det.value(),
        Err(err) => {
            log::debug!("Determinant of malformed matrix: {}", err);
            0.0
        }
    }
}

/// Determinant with the default absolute zero threshold
pub fn determinant(matrix: &[Vec<f64>]) -> Result<Determinant> {
    determinant_with_config(matrix, &SolverConfig::default())
}

/// Determinant of an ndarray matrix with the default threshold
pub fn determinant_array(matrix: &Array2<f64>) -> Result<Determinant> {
    determinant(&rows_of(matrix))
}

pub fn determinant_with_config(matrix: &[Vec<f64>], config: &SolverConfig) -> Result<Determinant> {
    config.validate()?;
    let n = square_order(matrix)?;
    check_finite(matrix)?;
    let zero = config.thresholds(max_abs_entry(matrix)).zero;

    let mut work = to_array(matrix, n);
    Ok(eliminate(&mut work, zero))
}

fn eliminate(work: &mut Array2<f64>, zero: f64) -> Determinant {
    let n = work.nrows();
    let mut det = 1.0;

    for i in 0..n {
        let (pivot_row, magnitude) = find_pivot(work, i, i);
        if magnitude < zero {
            log::trace!("Singular at column {}: max pivot {:e}", i, magnitude);
            return Determinant::Singular;
        }

        if pivot_row != i {
            swap_rows(work, i, pivot_row);
            det = -det;
        }

        let pivot = work[[i, i]];
        det *= pivot;

        let (top, mut bottom) = work.view_mut().split_at(Axis(0), i + 1);
        let pivot_tail = top.slice(s![i, i..]);
        for mut row in bottom.rows_mut() {
            let factor = row[i] / pivot;
            row.slice_mut(s![i..]).scaled_add(-factor, &pivot_tail);
        }
    }

    Determinant::Value(det)
}
