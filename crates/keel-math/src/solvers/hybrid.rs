//! Newton-Raphson with a bisection fallback.

use crate::error::MathResult;
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverResult};

/// Two-phase root search over a bounded domain.
///
/// Phase one is [`newton_raphson`] from `initial_guess`, with every step
/// clamped into `bounds`. Any Newton error (flat slope, a stalled step,
/// the iteration cap) starts phase two: [`bisection`] across the whole of
/// `bounds`, which is then the only source of failure. `newton_config` and
/// `bisection_config` budget the two phases separately.
///
/// The result's `method` records which phase produced the root.
///
/// # Example
///
/// ```rust
/// use keel_math::solvers::{hybrid, SolverConfig, SolverMethod};
///
/// // Newton starts on a flat spot of x^3 - 2x - 5; bisection takes over
/// let f = |x: f64| x * x * x - 2.0 * x - 5.0;
/// let df = |x: f64| 3.0 * x * x - 2.0;
/// let start = (2.0_f64 / 3.0).sqrt();
///
/// let config = SolverConfig::default().with_min_derivative(1e-6);
/// let result = hybrid(f, df, start, (1.0, 3.0), &config, &config).unwrap();
/// assert_eq!(result.method, SolverMethod::Bisection);
/// assert!((result.root - 2.0945514815).abs() < 1e-9);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    newton_config: &SolverConfig,
    bisection_config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lo, hi) = bounds;
    newton_raphson(&f, &df, initial_guess, Some(bounds), newton_config).or_else(|reason| {
        log::debug!("Newton-Raphson abandoned ({reason}); bisecting [{lo}, {hi}]");
        bisection(&f, lo, hi, bisection_config).map_err(|err| {
            log::debug!("bisection fallback failed: {err}");
            err
        })
    })
}
