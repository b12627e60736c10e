// src/utils/validation.rs
//! Scalar parameter validation helpers
//!
//! Each helper names the offending field in the error so callers can surface
//! the failure as parameter-validation feedback.

use crate::error::{EcgError, EcgResult};

/// Validates that `value` is finite and strictly positive
pub fn ensure_positive(value: f64, field: &'static str) -> EcgResult<()> {
    if !value.is_finite() {
        return Err(EcgError::invalid_parameter(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(EcgError::invalid_parameter(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

/// Validates that `value` is finite and not negative
pub fn ensure_non_negative(value: f64, field: &'static str) -> EcgResult<()> {
    if !value.is_finite() {
        return Err(EcgError::invalid_parameter(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(EcgError::invalid_parameter(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
