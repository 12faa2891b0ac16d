//! Internal rate of return for irregularly dated cash flows.
//!
//! The solved rate is the periodic (annual) rate `r` for which
//! [`present_value`](crate::cashflows::present_value) is zero. It is found
//! in two phases:
//!
//! 1. **Newton-Raphson** from the initial guess, each step clamped into the
//!    admissible [`RateBounds`](keel_core::types::RateBounds). Fast when the
//!    guess is reasonable.
//! 2. **Bisection** over the full admissible interval whenever Newton meets a
//!    flat slope, stalls away from zero, or runs out of iterations. Slower,
//!    but guaranteed once the interval brackets a sign change.
//!
//! Two surfaces are provided:
//!
//! - [`RateSolver::solve`] returns a typed [`AnalyticsResult`](crate::AnalyticsResult)
//! - [`solve_rate`] returns `f64::NAN` for every failure, for callers that
//!   test a sentinel instead of matching errors
//!
//! # Example
//!
//! ```rust
//! use keel_analytics::rates::{solve_rate, DEFAULT_INITIAL_GUESS};
//! use keel_core::types::CashFlow;
//!
//! // No sign change: nothing to solve
//! let flows = [CashFlow::new(0.0, 100.0), CashFlow::new(365.0, 50.0)];
//! assert!(solve_rate(&flows, DEFAULT_INITIAL_GUESS).is_nan());
//! ```

mod config;
mod solver;

pub use config::{RateSolverConfig, DEFAULT_INITIAL_GUESS, DEFAULT_RATE_TOLERANCE};
pub use solver::{solve_rate, solve_rate_dated, RateSolution, RateSolver};
