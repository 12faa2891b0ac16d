//! Tangent-following root search with an optional domain clamp.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverMethod, SolverResult};

/// Newton-Raphson iteration `x <- x - f(x) / f'(x)`.
///
/// With `bounds = Some((lo, hi))` a step that would leave `[lo, hi]` is cut
/// short at the boundary, and a small residual only counts as a root while
/// the point is strictly inside `(lo, hi)`.
///
/// A pass does the following, in order:
///
/// 1. Returns the current point if `|f|` is under tolerance (and interior)
/// 2. Gives up if `|f'|` is under `min_derivative`
/// 3. Steps and clamps; if the step moved less than the tolerance, the new
///    point is returned when its residual is under tolerance and reported
///    as stalled otherwise
///
/// # Errors
///
/// - [`MathError::InvalidInput`] for a non-finite starting point or for
///   bounds that are reversed or NaN
/// - [`MathError::FlatDerivative`] when the slope is too flat to step from
/// - [`MathError::StepStalled`] when steps stop moving short of a root
/// - [`MathError::ConvergenceFailed`] when `max_iterations` passes run out
///
/// # Example
///
/// ```rust
/// use keel_math::solvers::{newton_raphson, SolverConfig};
///
/// // 105 in one year against 100 today
/// let f = |r: f64| 105.0 / (1.0 + r) - 100.0;
/// let df = |r: f64| -105.0 / (1.0 + r).powi(2);
///
/// let result = newton_raphson(f, df, 0.0, Some((-0.999, 10.0)), &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.05).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    if !initial_guess.is_finite() {
        return Err(MathError::invalid_input(format!(
            "starting point {initial_guess} is not finite"
        )));
    }
    if let Some((lo, hi)) = bounds {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(MathError::invalid_input(format!(
                "bounds [{lo}, {hi}] are reversed or NaN"
            )));
        }
    }

    let inside = |x: f64| bounds.map_or(true, |(lo, hi)| lo < x && x < hi);
    let clamp = |x: f64| bounds.map_or(x, |(lo, hi)| x.max(lo).min(hi));
    let found = |root: f64, residual: f64, passes: u32| SolverResult {
        root,
        iterations: passes,
        residual,
        method: SolverMethod::NewtonRaphson,
    };

    let mut point = initial_guess;
    for pass in 0..config.max_iterations {
        let value = f(point);
        if value.abs() < config.tolerance && inside(point) {
            return Ok(found(point, value, pass));
        }

        let slope = df(point);
        if slope.abs() < config.min_derivative {
            return Err(MathError::FlatDerivative { x: point, slope });
        }

        let next = clamp(point - value / slope);
        if (next - point).abs() < config.tolerance {
            let residual = f(next);
            if residual.abs() < config.tolerance {
                return Ok(found(next, residual, pass + 1));
            }
            return Err(MathError::StepStalled { x: next, residual });
        }
        point = next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(point).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_year_discount_rate() {
        // 121 in two years is worth 100 today at 10%
        let f = |r: f64| 121.0 / (1.0 + r).powi(2) - 100.0;
        let df = |r: f64| -242.0 / (1.0 + r).powi(3);

        let result = newton_raphson(f, df, 0.0, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.1, epsilon = 1e-10);
        assert!(result.iterations < 10);
        assert_eq!(result.method, SolverMethod::NewtonRaphson);
    }

    #[test]
    fn test_guess_already_root() {
        let f = |r: f64| r - 0.05;
        let df = |_r: f64| 1.0;

        let result = newton_raphson(f, df, 0.05, None, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_flat_start() {
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, None, &SolverConfig::default());

        assert_eq!(result, Err(MathError::FlatDerivative { x: 0.0, slope: 0.0 }));
    }

    #[test]
    fn test_custom_flat_threshold() {
        // Slope 1e-12 is usable by default but rejected with a coarser threshold
        let f = |x: f64| 1e-12 * (x - 1.0e6);
        let df = |_x: f64| 1e-12;

        let fine = SolverConfig::default();
        let root = newton_raphson(f, df, 0.0, None, &fine).unwrap().root;
        assert_relative_eq!(root, 1.0e6, epsilon = 1e-6);

        let coarse = fine.with_min_derivative(1e-10);
        assert!(matches!(
            newton_raphson(f, df, 0.0, None, &coarse),
            Err(MathError::FlatDerivative { .. })
        ));
    }

    #[test]
    fn test_clamps_step_to_bounds() {
        // Root at 5 lies outside [0, 2]; the iterate is pinned to the upper bound
        let f = |x: f64| x - 5.0;
        let df = |_x: f64| 1.0;

        let result = newton_raphson(f, df, 1.0, Some((0.0, 2.0)), &SolverConfig::default());

        match result {
            Err(MathError::StepStalled { x, residual }) => {
                assert_eq!(x, 2.0);
                assert_relative_eq!(residual, -3.0);
            }
            other => panic!("expected StepStalled, got {other:?}"),
        }
    }

    #[test]
    fn test_root_on_boundary_not_accepted_directly() {
        // f(2) == 0 exactly but 2 is the closed upper bound, so the first
        // check is skipped; the zero-length step then accepts it.
        let f = |x: f64| x - 2.0;
        let df = |_x: f64| 1.0;

        let result =
            newton_raphson(f, df, 2.0, Some((0.0, 2.0)), &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 2.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_cycle_hits_iteration_cap() {
        // Newton cycles between 0 and 1 for x^3 - 2x + 2
        let f = |x: f64| x * x * x - 2.0 * x + 2.0;
        let df = |x: f64| 3.0 * x * x - 2.0;

        let config = SolverConfig::new(1e-12, 20);
        let result = newton_raphson(f, df, 0.0, None, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 20, .. })
        ));
    }

    #[test]
    fn test_reversed_bounds_do_not_panic() {
        let f = |r: f64| 110.0 / (1.0 + r) - 100.0;
        let df = |r: f64| -110.0 / (1.0 + r).powi(2);

        for bounds in [(1.0, 0.5), (f64::NAN, 0.5), (-0.5, f64::NAN)] {
            let result = newton_raphson(f, df, 0.1, Some(bounds), &SolverConfig::default());
            assert!(matches!(result, Err(MathError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_non_finite_guess() {
        let result = newton_raphson(|x| x, |_| 1.0, f64::NAN, None, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
