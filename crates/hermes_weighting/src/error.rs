use thiserror::Error;

/// Rejected weighting or approximator parameters, raised at construction
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("Load of {load} kg is too heavy to be carried, limit is {limit} kg")]
    LoadTooHeavy { load: f64, limit: f64 },
    #[error("Grade floor must be a finite non-positive percentage, got {0}")]
    InvalidGradeFloor(f64),
    #[error("Failed to parse weighting configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inconsistent result while computing a weight, duration or estimate.
/// Never swallowed: a bogus value would corrupt the cost ordering of the search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    #[error("{quantity} should never be NaN")]
    NaN { quantity: &'static str },
    #[error("{quantity} should never be negative, got {value}")]
    Negative { quantity: &'static str, value: f64 },
    #[error("{quantity} should be finite for a traversable edge")]
    NotFinite { quantity: &'static str },
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NotPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::Negative { field, value })
    }
}

/// Validates a computed quantity: finite and non-negative
pub(crate) fn check_quantity(quantity: &'static str, value: f64) -> Result<f64, ComputationError> {
    if value.is_nan() {
        return Err(ComputationError::NaN { quantity });
    }

    if value.is_infinite() {
        return Err(ComputationError::NotFinite { quantity });
    }

    if value < 0.0 {
        return Err(ComputationError::Negative { quantity, value });
    }

    Ok(value)
}
