//! Validation errors raised at the boundary between caller data and the
//! derived-metric helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A price, fee or sample that must be zero or more was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    /// NaN or infinity where a plain number was expected.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("quantity for `{item}` must be at least 1")]
    ZeroQuantity { item: String },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveTarget { field: &'static str, value: f64 },

    #[error("price {price} is above the original price {original}")]
    PriceAboveOriginal { price: f64, original: f64 },

    #[error("chart series is empty")]
    EmptySeries,

    #[error("{what} needs at least one entry")]
    EmptyCollection { what: &'static str },
}

/// Reject NaN/inf and negative values in one step.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(InputError::NegativeAmount { field, value });
    }
    Ok(value)
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite { field })
    }
}

/// Strictly positive divisor (targets, original prices, heatmap maxima).
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(InputError::NonPositiveTarget { field, value });
    }
    Ok(value)
}
