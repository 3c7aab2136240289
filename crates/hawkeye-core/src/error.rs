//! Error types for the valuation and strategy engine

use thiserror::Error;

/// Errors raised by engine operations
///
/// Mathematically undefined results (a zero-risk trade, a 100% loss) are not
/// errors: they surface as `None` from the calculator functions.
#[derive(Debug, Error)]
pub enum HawkeyeError {
    /// A required value was non-finite or outside its domain
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A survey was submitted for profiling before every question was answered
    #[error("Survey incomplete, unanswered questions: {}", missing.join(", "))]
    IncompleteSurvey {
        missing: Vec<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HawkeyeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, HawkeyeError>;

/// Reject NaN and infinities for a named input.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HawkeyeError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(HawkeyeError::invalid(field, format!("must be greater than zero, got {value}")))
    }
}
