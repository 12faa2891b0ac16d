//! One-dimensional root finders over `Fn(f64) -> f64` closures.
//!
//! - [`newton_raphson`] follows tangents and can clamp each step into a
//!   domain; quadratic near a simple root, unreliable far from one
//! - [`bisection`] halves a sign-change bracket; one bit per pass, but
//!   never diverges
//! - [`hybrid`] runs Newton first and bisects the domain when Newton gives up
//!
//! All three return a [`SolverResult`] naming the [`SolverMethod`] that
//! found the root, or a [`MathError`](crate::MathError) explaining why none was found.
//!
//! # Example: Rate of Return
//!
//! ```rust
//! use keel_math::solvers::{hybrid, SolverConfig};
//!
//! // Invest 100, receive 60 after one year and 60 after two years
//! let pv = |r: f64| -100.0 + 60.0 / (1.0 + r) + 60.0 / (1.0 + r).powi(2);
//! let dpv = |r: f64| -60.0 / (1.0 + r).powi(2) - 120.0 / (1.0 + r).powi(3);
//!
//! let newton = SolverConfig::new(1e-10, 50);
//! let fallback = SolverConfig::new(1e-10, 100);
//! let result = hybrid(pv, dpv, 0.1, (-0.99, 10.0), &newton, &fallback).unwrap();
//! assert!(pv(result.root).abs() < 1e-8);
//! ```

mod bisection;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use hybrid::hybrid;
pub use newton::newton_raphson;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Residual and step size under which a point counts as a root.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Pass budget when none is given.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Slopes flatter than this stop a Newton run.
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-15;

/// Stopping rules shared by every finder.
///
/// Deserializes with missing fields filled from the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Bound on `|f|` at an accepted root, and on the last step size.
    pub tolerance: f64,
    /// Passes before the finder reports [`MathError::ConvergenceFailed`](crate::MathError::ConvergenceFailed).
    pub max_iterations: u32,
    /// Newton only; see [`DEFAULT_MIN_DERIVATIVE`].
    pub min_derivative: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
        }
    }
}

impl SolverConfig {
    /// Tolerance and budget, with the default slope threshold.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Replaces `tolerance`.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replaces `max_iterations`.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replaces `min_derivative`.
    #[must_use]
    pub fn with_min_derivative(mut self, min_derivative: f64) -> Self {
        self.min_derivative = min_derivative;
        self
    }
}

/// Which algorithm produced a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverMethod {
    /// Newton-Raphson iteration
    NewtonRaphson,
    /// Interval bisection
    Bisection,
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverMethod::NewtonRaphson => "Newton-Raphson",
            SolverMethod::Bisection => "Bisection",
        };
        write!(f, "{name}")
    }
}

/// A root and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Accepted point.
    pub root: f64,
    /// Passes spent; zero when the start was already a root.
    pub iterations: u32,
    /// `f(root)`.
    pub residual: f64,
    /// Finder that accepted the point.
    pub method: SolverMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-7)
            .with_max_iterations(50)
            .with_min_derivative(1e-10);

        assert_eq!(config.tolerance, 1e-7);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.min_derivative, 1e-10);
    }

    #[test]
    fn test_config_new_keeps_default_threshold() {
        let config = SolverConfig::new(1e-6, 10);
        assert_eq!(config.min_derivative, DEFAULT_MIN_DERIVATIVE);
    }

    #[test]
    fn test_config_partial_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 7}"#).unwrap();
        assert_eq!(config.max_iterations, 7);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(SolverMethod::NewtonRaphson.to_string(), "Newton-Raphson");
        assert_eq!(SolverMethod::Bisection.to_string(), "Bisection");
    }
}
