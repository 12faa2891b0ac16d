//! Validation failures raised when building cash flows and rate bounds.

use thiserror::Error;

/// Result alias for checked constructors in this crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Rejected input to a checked constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Offset or amount that cannot be discounted.
    #[error("cash flow rejected: {reason}")]
    InvalidCashFlow {
        /// Which field was bad.
        reason: String,
    },

    /// Bounds that do not enclose any rate.
    #[error("rate bounds [{min}, {max}] rejected: {reason}")]
    InvalidRateBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// What is wrong with the pair.
        reason: String,
    },
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidCashFlow`].
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CoreError::InvalidRateBounds`].
    #[must_use]
    pub fn invalid_rate_bounds(min: f64, max: f64, reason: impl Into<String>) -> Self {
        Self::InvalidRateBounds {
            min,
            max,
            reason: reason.into(),
        }
    }
}
