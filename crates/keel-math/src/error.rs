//! Root-finder failures.

use thiserror::Error;

/// Result of a root-finding call.
pub type MathResult<T> = Result<T, MathError>;

/// Why a root finder gave up.
///
/// Every variant carries the numbers needed to decide on a fallback, so
/// callers such as [`hybrid`](crate::solvers::hybrid) can switch strategy
/// without re-evaluating the function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration budget ran out.
    #[error("no root within {iterations} iterations (last |f| = {residual:.3e})")]
    ConvergenceFailed {
        /// Iterations spent.
        iterations: u32,
        /// Magnitude of `f` at the last point.
        residual: f64,
    },

    /// The interval ends do not bracket a sign change.
    #[error("no sign change on [{lo}, {hi}]: f(lo) = {f_lo:.3e}, f(hi) = {f_hi:.3e}")]
    NoSignChange {
        /// Lower end.
        lo: f64,
        /// Upper end.
        hi: f64,
        /// `f(lo)`.
        f_lo: f64,
        /// `f(hi)`.
        f_hi: f64,
    },

    /// The slope at `x` is too flat for a Newton step.
    #[error("derivative {slope:.3e} at {x} is too flat to step from")]
    FlatDerivative {
        /// Point of evaluation.
        x: f64,
        /// Derivative at `x`.
        slope: f64,
    },

    /// Newton steps stopped moving while `f` is still away from zero.
    #[error("steps settled at {x} but f = {residual:.3e} is above tolerance")]
    StepStalled {
        /// Where the iteration settled.
        x: f64,
        /// `f(x)`.
        residual: f64,
    },

    /// An argument cannot be used.
    #[error("invalid solver input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Shorthand for [`MathError::ConvergenceFailed`].
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Shorthand for [`MathError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
