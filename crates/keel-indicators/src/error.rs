//! Error types for indicator calculations.

use thiserror::Error;

/// A specialized Result type for indicator calculations.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// Errors raised for invalid indicator parameters.
///
/// Numeric degeneracies (a window without losses, a constant window,
/// too little history) are not errors; they yield documented substitute
/// values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// A lookback period or window length is out of range.
    #[error("Invalid {name} period {value}: must be at least {min}")]
    InvalidPeriod {
        /// Name of the parameter.
        name: &'static str,
        /// Value supplied.
        value: usize,
        /// Smallest accepted value.
        min: usize,
    },

    /// Paired input series differ in length.
    #[error("Length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch {
        /// Length of the first series.
        x_len: usize,
        /// Length of the second series.
        y_len: usize,
    },
}

impl IndicatorError {
    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(name: &'static str, value: usize, min: usize) -> Self {
        Self::InvalidPeriod { name, value, min }
    }
}

/// Rejects a period below `min`.
pub(crate) fn check_period(name: &'static str, value: usize, min: usize) -> IndicatorResult<()> {
    if value < min {
        return Err(IndicatorError::invalid_period(name, value, min));
    }
    Ok(())
}
