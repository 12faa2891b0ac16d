//! Hybrid Newton/bisection rate solver.

use keel_core::types::{CashFlow, DatedCashFlow};
use keel_math::solvers::{hybrid, SolverMethod};
use serde::{Deserialize, Serialize};

use super::config::RateSolverConfig;
use crate::cashflows::{present_value, present_value_derivative};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum number of cash flows from which a rate can be inferred.
const MIN_CASH_FLOWS: usize = 2;

/// A solved rate with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSolution {
    /// The periodic rate that zeroes present value.
    pub rate: f64,
    /// Iterations spent in the phase that produced the rate.
    pub iterations: u32,
    /// Present value at `rate`.
    pub residual: f64,
    /// Phase that produced the rate.
    pub method: SolverMethod,
}

/// Solves for the rate that zeroes the present value of a cash-flow sequence.
///
/// # Example
///
/// ```rust
/// use keel_analytics::rates::{RateSolver, RateSolverConfig};
/// use keel_core::types::CashFlow;
///
/// let solver = RateSolver::new(RateSolverConfig::new().with_initial_guess(0.05));
/// let flows = [CashFlow::new(0.0, -1000.0), CashFlow::new(365.25, 1100.0)];
///
/// let solution = solver.solve(&flows).unwrap();
/// assert!((solution.rate - 0.10).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RateSolver {
    config: RateSolverConfig,
}

impl RateSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: RateSolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &RateSolverConfig {
        &self.config
    }

    /// Solves for the rate.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::InsufficientCashFlows`] for fewer than two flows
    /// - [`AnalyticsError::NoRootBracketed`] when present value has the same
    ///   sign at both rate bounds and Newton did not find a root
    /// - [`AnalyticsError::RateSolverFailed`] when bisection runs out of iterations
    /// - [`AnalyticsError::Core`] when the configured bounds are unusable
    ///   (reversed, non-finite, or at or below -1)
    pub fn solve(&self, cash_flows: &[CashFlow]) -> AnalyticsResult<RateSolution> {
        if cash_flows.len() < MIN_CASH_FLOWS {
            return Err(AnalyticsError::InsufficientCashFlows {
                required: MIN_CASH_FLOWS,
                actual: cash_flows.len(),
            });
        }

        let config = &self.config;
        config.bounds.validate()?;

        let result = hybrid(
            |rate| present_value(cash_flows, rate),
            |rate| present_value_derivative(cash_flows, rate),
            config.bounds.clamp(config.initial_guess),
            config.bounds.as_tuple(),
            &config.newton(),
            &config.bisection(),
        )
        .map_err(|err| {
            log::debug!("rate solve over {} cash flows failed: {err}", cash_flows.len());
            AnalyticsError::from_solver(err)
        })?;

        log::trace!(
            "rate {} solved by {} in {} iterations (PV residual {:.2e})",
            result.root,
            result.method,
            result.iterations,
            result.residual
        );
        if !config.bounds.contains(result.root) {
            log::debug!("solved rate {} sits on the rate domain boundary", result.root);
        }

        Ok(RateSolution {
            rate: result.root,
            iterations: result.iterations,
            residual: result.residual,
            method: result.method,
        })
    }

    /// Solves for the rate of calendar-dated cash flows.
    ///
    /// The flows are ordered by date and measured in days from the earliest one.
    pub fn solve_dated(&self, cash_flows: &[DatedCashFlow]) -> AnalyticsResult<RateSolution> {
        self.solve(&CashFlow::from_dated(cash_flows))
    }
}

/// Solves for the rate, returning `f64::NAN` when no rate can be found.
///
/// Uses the default [`RateSolverConfig`] with the given starting point.
/// NaN is returned for fewer than two cash flows, for a sequence whose
/// present value does not change sign over `[-0.999, 10]`, and when both
/// phases exhaust their iterations.
///
/// # Example
///
/// ```rust
/// use keel_analytics::rates::solve_rate;
/// use keel_core::types::CashFlow;
///
/// assert!(solve_rate(&[CashFlow::new(0.0, -100.0)], 0.1).is_nan());
/// ```
#[must_use]
pub fn solve_rate(cash_flows: &[CashFlow], initial_guess: f64) -> f64 {
    RateSolver::new(RateSolverConfig::default().with_initial_guess(initial_guess))
        .solve(cash_flows)
        .map_or(f64::NAN, |solution| solution.rate)
}

/// Calendar-dated variant of [`solve_rate`].
#[must_use]
pub fn solve_rate_dated(cash_flows: &[DatedCashFlow], initial_guess: f64) -> f64 {
    RateSolver::new(RateSolverConfig::default().with_initial_guess(initial_guess))
        .solve_dated(cash_flows)
        .map_or(f64::NAN, |solution| solution.rate)
}
