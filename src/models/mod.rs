//! The four decision models.
//!
//! Each model is a single-pass pure computation: an input record in, a result
//! record (and chart series) out. Preconditions are checked explicitly before
//! any formula runs, so no NaN or infinity ever reaches a result.

pub mod break_even;
pub mod eoq;
pub mod production;
pub mod queueing;

use crate::error::{ModelError, ModelResult};

/// Require a finite, strictly positive parameter.
pub(crate) fn require_positive(name: &str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::invalid_parameter(name, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ModelError::invalid_parameter(
            name,
            format!("must be > 0, got {value}"),
        ));
    }
    Ok(())
}

/// Require a finite, non-negative parameter.
pub(crate) fn require_non_negative(name: &str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::invalid_parameter(name, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ModelError::invalid_parameter(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    Ok(())
}

/// Require a finite parameter.
pub(crate) fn require_finite(name: &str, value: f64) -> ModelResult<()> {
    if !value.is_finite() {
        return Err(ModelError::invalid_parameter(name, "must be a finite number"));
    }
    Ok(())
}
