//! Errors raised by the scoreline model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("{0}")]
    DimensionMismatch(#[from] DimensionMismatch),
}

/// A model input that is negative, non-finite or outside of its permitted range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {value} ({reason})")]
pub struct InvalidInput {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}
impl InvalidInput {
    pub fn new(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self {
            field,
            value,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("home distribution has {home} entries, away distribution has {away}")]
pub struct DimensionMismatch {
    pub home: usize,
    pub away: usize,
}

/// Requires `value` to be finite and non-negative.
pub fn check_non_negative(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        Err(InvalidInput::new(field, value, "must be finite"))
    } else if value < 0.0 {
        Err(InvalidInput::new(field, value, "must not be negative"))
    } else {
        Ok(value)
    }
}

/// Requires `value` to be finite and strictly positive.
pub fn check_positive(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        Err(InvalidInput::new(field, value, "must be finite"))
    } else if value <= 0.0 {
        Err(InvalidInput::new(field, value, "must be positive"))
    } else {
        Ok(value)
    }
}
