//! Rate solver configuration.

use keel_core::types::RateBounds;
use keel_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;

/// Starting rate for the Newton phase.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Absolute tolerance on present value and on Newton step size.
pub const DEFAULT_RATE_TOLERANCE: f64 = 1e-7;

/// Configuration for [`RateSolver`](super::RateSolver).
///
/// Every field has a default, so partial JSON/TOML documents deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSolverConfig {
    /// Starting rate for Newton-Raphson.
    pub initial_guess: f64,

    /// Absolute tolerance, shared by both phases.
    pub tolerance: f64,

    /// Iteration cap for the Newton phase.
    pub newton_max_iterations: u32,

    /// Iteration cap for the bisection phase.
    pub bisection_max_iterations: u32,

    /// Derivative magnitude below which Newton hands over to bisection.
    pub min_derivative: f64,

    /// Admissible rate domain; also the bisection bracket.
    pub bounds: RateBounds,
}

impl Default for RateSolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_RATE_TOLERANCE,
            newton_max_iterations: 50,
            bisection_max_iterations: 100,
            min_derivative: 1e-10,
            bounds: RateBounds::default(),
        }
    }
}

impl RateSolverConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the Newton iteration cap.
    #[must_use]
    pub fn with_newton_max_iterations(mut self, iterations: u32) -> Self {
        self.newton_max_iterations = iterations;
        self
    }

    /// Sets the bisection iteration cap.
    #[must_use]
    pub fn with_bisection_max_iterations(mut self, iterations: u32) -> Self {
        self.bisection_max_iterations = iterations;
        self
    }

    /// Sets the admissible rate domain.
    #[must_use]
    pub fn with_bounds(mut self, bounds: RateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the admissible rate domain from raw limits, validating them.
    pub fn with_rate_range(self, min: f64, max: f64) -> AnalyticsResult<Self> {
        Ok(self.with_bounds(RateBounds::new(min, max)?))
    }

    /// Solver settings for the Newton phase.
    pub(crate) fn newton(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.newton_max_iterations)
            .with_min_derivative(self.min_derivative)
    }

    /// Solver settings for the bisection phase.
    pub(crate) fn bisection(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.bisection_max_iterations)
    }
}
