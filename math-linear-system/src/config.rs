//! Tolerance configuration
//!
//! The defaults reproduce the classic fixed thresholds: `1e-10` for pivot and
//! zero tests and `1e-8` for verifying a computed solution against the
//! original equations. [`ToleranceMode::Relative`] scales both by the largest
//! coefficient magnitude so that very small or very large systems are not
//! misclassified.

use crate::error::{LinearSystemError, Result};
use serde::{Deserialize, Serialize};

/// Default absolute threshold under which a value counts as zero
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default ratio between the verification tolerance and [`DEFAULT_EPSILON`]
pub const DEFAULT_VERIFICATION_FACTOR: f64 = 100.0;

/// How thresholds relate to the magnitude of the coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceMode {
    /// Thresholds are used as-is
    #[default]
    Absolute,
    /// Thresholds are multiplied by `max |a_ij|` of the coefficient matrix
    Relative,
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Zero threshold for pivot selection, elimination and consistency checks
    pub epsilon: f64,
    /// Verification tolerance is `epsilon * verification_factor`
    pub verification_factor: f64,
    /// Absolute or coefficient-relative thresholds
    pub tolerance: ToleranceMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            verification_factor: DEFAULT_VERIFICATION_FACTOR,
            tolerance: ToleranceMode::Absolute,
        }
    }
}

/// Concrete thresholds for one system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Magnitudes at or below this are treated as zero
    pub zero: f64,
    /// Largest accepted residual `|sum_j a_ij x_j - b_i|`
    pub verification: f64,
}

impl SolverConfig {
    /// Config with relative tolerances and default magnitudes
    pub fn relative() -> Self {
        Self {
            tolerance: ToleranceMode::Relative,
            ..Self::default()
        }
    }

    /// Check that both thresholds are positive and finite
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LinearSystemError::InvalidConfig(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if !(self.verification_factor.is_finite() && self.verification_factor > 0.0) {
            return Err(LinearSystemError::InvalidConfig(format!(
                "verification_factor must be positive and finite, got {}",
                self.verification_factor
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Thresholds for a coefficient matrix whose largest magnitude is `max_abs`
    ///
    /// In relative mode a zero matrix falls back to the absolute thresholds.
    pub fn thresholds(&self, max_abs: f64) -> Thresholds {
        let scale = match self.tolerance {
            ToleranceMode::Absolute => 1.0,
            ToleranceMode::Relative if max_abs > 0.0 && max_abs.is_finite() => max_abs,
            ToleranceMode::Relative => 1.0,
        };
        let zero = self.epsilon * scale;
        Thresholds {
            zero,
            verification: zero * self.verification_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_thresholds() {
        let t = SolverConfig::default().thresholds(1e6);
        assert_eq!(t.zero, 1e-10);
        assert_relative_eq!(t.verification, 1e-8, max_relative = 1e-12);
    }

    #[test]
    fn test_relative_thresholds_scale() {
        let config = SolverConfig::relative();
        let t = config.thresholds(1e-12);
        assert_relative_eq!(t.zero, 1e-22, max_relative = 1e-12);

        // Zero matrix keeps the absolute floor
        assert_eq!(config.thresholds(0.0).zero, 1e-10);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SolverConfig::from_json(r#"{ "tolerance": "relative" }"#)
            .expect("partial config should parse");
        assert_eq!(config.tolerance, ToleranceMode::Relative);
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.verification_factor, DEFAULT_VERIFICATION_FACTOR);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SolverConfig {
            epsilon: 1e-12,
            verification_factor: 50.0,
            tolerance: ToleranceMode::Relative,
        };
        let json = config.to_json().expect("serialize");
        assert!(json.contains("\"relative\""));
        assert_eq!(SolverConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SolverConfig::from_json(r#"{ "epsilon": -1.0 }"#);
        assert!(matches!(result, Err(LinearSystemError::InvalidConfig(_))));

        let config = SolverConfig {
            verification_factor: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());

        let result = SolverConfig::from_json("{ not json");
        assert!(matches!(result, Err(LinearSystemError::Json(_))));
    }
}
