//! Error types for curve_interpolation

use thiserror::Error;

/// Main error type for curve interpolation
///
/// Infeasible path words are not errors: solvers report them as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Minimum turning radius must be positive and finite
    #[error("Invalid turning radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),
    /// Sampling step must be positive and finite
    #[error("Invalid step size: {0} (must be positive and finite)")]
    InvalidStepSize(f64),
    /// One segment would need more samples than the sampler allows
    #[error("Too many samples: {requested} requested for one segment (limit {limit})")]
    TooManySamples { requested: f64, limit: usize },
    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
    /// gnuplot could not be started or failed to write its output
    #[error("Plot error: {0}")]
    Plot(String),
}

impl From<toml::de::Error> for CurveError {
    fn from(e: toml::de::Error) -> Self {
        CurveError::Config(e.to_string())
    }
}

/// Result type alias for curve operations
pub type CurveResult<T> = Result<T, CurveError>;

/// Reject non-positive or non-finite turning radii
pub fn validate_radius(radius: f64) -> CurveResult<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(CurveError::InvalidRadius(radius))
    }
}

/// Reject non-positive or non-finite sampling steps
pub fn validate_step_size(step_size: f64) -> CurveResult<f64> {
    if step_size.is_finite() && step_size > 0.0 {
        Ok(step_size)
    } else {
        Err(CurveError::InvalidStepSize(step_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::InvalidRadius(-1.0);
        assert_eq!(
            format!("{}", err),
            "Invalid turning radius: -1 (must be positive and finite)"
        );
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("step_size = ").unwrap_err();
        let err: CurveError = toml_err.into();
        assert!(matches!(err, CurveError::Config(_)));
    }

    #[test]
    fn test_validate_radius() {
        assert_eq!(validate_radius(2.5), Ok(2.5));
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(-3.0).is_err());
        assert!(validate_radius(f64::NAN).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
    }

    #[test]
    fn test_too_many_samples_display() {
        let err = CurveError::TooManySamples {
            requested: 1e300,
            limit: 10,
        };
        assert!(format!("{}", err).starts_with("Too many samples"));
    }

    #[test]
    fn test_validate_step_size() {
        assert_eq!(validate_step_size(0.1), Ok(0.1));
        assert!(matches!(
            validate_step_size(0.0),
            Err(CurveError::InvalidStepSize(_))
        ));
    }
}
