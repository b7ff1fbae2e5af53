//! Classified solver output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of solving a square system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionStatus {
    /// Full rank; values verified against the original equations
    UniqueSolution,
    /// Elimination left a row of the form `0 = c` with `c != 0`
    NoSolution,
    /// Consistent but rank deficient
    InfiniteSolutions,
    /// Malformed input, or a candidate solution that failed verification
    CalculationError,
}

impl SolutionStatus {
    /// One-line human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SolutionStatus::UniqueSolution => "Solution found.",
            SolutionStatus::NoSolution => "Inconsistent system: no solution.",
            SolutionStatus::InfiniteSolutions => {
                "Underdetermined system: infinitely many solutions."
            }
            SolutionStatus::CalculationError => "Calculation error.",
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of a solve call
///
/// `values` is non-empty exactly when `has_solution` is true, which is
/// exactly when `status` is [`SolutionStatus::UniqueSolution`]. The fields are
/// private so that only the solver (and checked deserialization) can build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSolution")]
pub struct Solution {
    has_solution: bool,
    status: SolutionStatus,
    values: Vec<f64>,
}

impl Solution {
    pub(crate) fn unique(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self {
            has_solution: true,
            status: SolutionStatus::UniqueSolution,
            values,
        }
    }

    pub(crate) fn without_values(status: SolutionStatus) -> Self {
        debug_assert_ne!(status, SolutionStatus::UniqueSolution);
        Self {
            has_solution: false,
            status,
            values: Vec::new(),
        }
    }

    pub(crate) fn no_solution() -> Self {
        Self::without_values(SolutionStatus::NoSolution)
    }

    pub(crate) fn infinite_solutions() -> Self {
        Self::without_values(SolutionStatus::InfiniteSolutions)
    }

    pub(crate) fn calculation_error() -> Self {
        Self::without_values(SolutionStatus::CalculationError)
    }

    /// Whether concrete numeric values are available
    pub fn has_solution(&self) -> bool {
        self.has_solution
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    /// `values()[i]` is the i-th unknown; empty unless the solution is unique
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Take ownership of the values (empty unless the solution is unique)
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn is_unique(&self) -> bool {
        self.status == SolutionStatus::UniqueSolution
    }
}

impl fmt::Display for Solution {
    /// Renders `x1 = ...` lines with six decimals for a unique solution,
    /// otherwise the status description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_solution {
            return f.write_str(self.status.description());
        }
        write!(f, "Solution found:")?;
        for (i, value) in self.values.iter().enumerate() {
            write!(f, "\nx{} = {:.6}", i + 1, value)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawSolution {
    has_solution: bool,
    status: SolutionStatus,
    #[serde(default)]
    values: Vec<f64>,
}

impl TryFrom<RawSolution> for Solution {
    type Error = String;

    fn try_from(raw: RawSolution) -> Result<Self, Self::Error> {
        let unique = raw.status == SolutionStatus::UniqueSolution;
        if raw.has_solution != unique || raw.values.is_empty() == unique {
            return Err(format!(
                "inconsistent solution: status {:?}, has_solution {}, {} values",
                raw.status,
                raw.has_solution,
                raw.values.len()
            ));
        }
        Ok(Self {
            has_solution: raw.has_solution,
            status: raw.status,
            values: raw.values,
        })
    }
}
