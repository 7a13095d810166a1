//! Sampling and tolerance configuration.
//!
//! Settings are passed explicitly at call time; there are no process-wide
//! defaults to toggle.

use serde::{Deserialize, Serialize};

use crate::common::{validate_step_size, CurveError, CurveResult};

/// Configuration for curve sampling and numeric comparisons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Arc-length spacing between sampled points [m]
    pub step_size: f64,
    /// Slack allowed on sign and domain checks of the path formulas
    pub tolerance: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            step_size: 0.1,
            tolerance: 1e-9,
        }
    }
}

impl CurveConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Parse a configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> CurveResult<Self> {
        let config: CurveConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CurveResult<()> {
        validate_step_size(self.step_size)?;
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(CurveError::Config(format!(
                "tolerance must be non-negative and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CurveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.step_size, 0.1);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CurveConfig::from_toml_str("step_size = 0.05").unwrap();
        assert_eq!(config.step_size, 0.05);
        assert_eq!(config.tolerance, CurveConfig::default().tolerance);
    }

    #[test]
    fn test_from_toml_rejects_bad_step() {
        let result = CurveConfig::from_toml_str("step_size = -1.0");
        assert!(matches!(result, Err(CurveError::InvalidStepSize(_))));
    }

    #[test]
    fn test_from_toml_rejects_bad_syntax() {
        let result = CurveConfig::from_toml_str("step_size = [");
        assert!(matches!(result, Err(CurveError::Config(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = CurveConfig::default().with_tolerance(-1.0);
        assert!(matches!(config.validate(), Err(CurveError::Config(_))));
    }
}
