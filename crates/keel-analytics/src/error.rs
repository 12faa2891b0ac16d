//! Error types for the analytics engine.

use keel_core::CoreError;
use keel_math::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Too few cash flows to infer a rate
    #[error("insufficient cash flows: need at least {required}, got {actual}")]
    InsufficientCashFlows {
        /// Minimum number of cash flows.
        required: usize,
        /// Number supplied.
        actual: usize,
    },

    /// Present value has the same sign at both ends of the rate domain
    #[error(
        "no rate in [{min}, {max}] zeroes present value (PV {pv_at_min:.4e} .. {pv_at_max:.4e})"
    )]
    NoRootBracketed {
        /// Lower rate bound.
        min: f64,
        /// Upper rate bound.
        max: f64,
        /// Present value at the lower bound.
        pv_at_min: f64,
        /// Present value at the upper bound.
        pv_at_max: f64,
    },

    /// Rate solver exhausted its iterations
    #[error("rate solver failed to converge after {iterations} iterations: {reason}")]
    RateSolverFailed {
        /// Number of iterations before failure.
        iterations: u32,
        /// Reason for failure.
        reason: String,
    },

    /// Error from the numerical layer
    #[error(transparent)]
    Math(#[from] MathError),

    /// Error from the domain types
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Maps a solver failure onto the analytics taxonomy.
    pub(crate) fn from_solver(err: MathError) -> Self {
        match err {
            MathError::NoSignChange { lo, hi, f_lo, f_hi } => Self::NoRootBracketed {
                min: lo,
                max: hi,
                pv_at_min: f_lo,
                pv_at_max: f_hi,
            },
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::RateSolverFailed {
                iterations,
                reason: format!("bisection residual {residual:.2e} above tolerance"),
            },
            other => Self::Math(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_maps_to_no_root() {
        let err = AnalyticsError::from_solver(MathError::NoSignChange {
            lo: -0.999,
            hi: 10.0,
            f_lo: 1.0,
            f_hi: 2.0,
        });
        assert!(matches!(err, AnalyticsError::NoRootBracketed { .. }));
        assert!(err.to_string().starts_with("no rate in [-0.999, 10]"));
    }

    #[test]
    fn test_convergence_maps_to_solver_failed() {
        let err = AnalyticsError::from_solver(MathError::convergence_failed(100, 0.5));
        assert!(matches!(
            err,
            AnalyticsError::RateSolverFailed {
                iterations: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_other_math_errors_pass_through() {
        let err = AnalyticsError::from_solver(MathError::invalid_input("bad"));
        assert_eq!(err.to_string(), "invalid solver input: bad");
    }
}
