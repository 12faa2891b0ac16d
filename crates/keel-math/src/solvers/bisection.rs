//! Interval halving over a sign-change bracket.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverMethod, SolverResult};

/// Finds a root of `f` inside the bracket formed by `a` and `b`.
///
/// The endpoints may be given in either order. `f(a)` and `f(b)` must not
/// share a sign. An end where `f` is exactly zero is returned as is.
///
/// Every pass evaluates the midpoint and returns it once
/// `|f(mid)| < tolerance`. Otherwise the half without the sign change is
/// discarded, and the search ends at the centre of the bracket as soon as
/// the bracket is narrower than `tolerance`. Convergence is linear, one
/// bit per pass, but it cannot diverge.
///
/// # Errors
///
/// - [`MathError::NoSignChange`] when both ends share a sign
/// - [`MathError::ConvergenceFailed`] when `max_iterations` passes neither
///   hit the tolerance nor narrowed the bracket enough
///
/// # Example
///
/// ```rust
/// use keel_math::solvers::{bisection, SolverConfig};
///
/// // Discount factor of 0.5 over three years
/// let f = |r: f64| (1.0 + r).powi(-3) - 0.5;
///
/// let result = bisection(f, 0.0, 1.0, &SolverConfig::new(1e-12, 100)).unwrap();
/// assert!((result.root - (2.0_f64.powf(1.0 / 3.0) - 1.0)).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut left, mut right) = if a <= b { (a, b) } else { (b, a) };
    let mut f_left = f(left);
    let f_right = f(right);

    if f_left * f_right > 0.0 {
        return Err(MathError::NoSignChange {
            lo: left,
            hi: right,
            f_lo: f_left,
            f_hi: f_right,
        });
    }

    let found = |root: f64, residual: f64, passes: u32| SolverResult {
        root,
        iterations: passes,
        residual,
        method: SolverMethod::Bisection,
    };

    // An exact zero at an end would be halved away from
    if f_left == 0.0 {
        return Ok(found(left, f_left, 0));
    }
    if f_right == 0.0 {
        return Ok(found(right, f_right, 0));
    }

    for pass in 1..=config.max_iterations {
        let centre = 0.5 * (left + right);
        let f_centre = f(centre);

        if f_centre.abs() < config.tolerance {
            return Ok(found(centre, f_centre, pass));
        }

        // Keep the half whose ends still differ in sign
        if f_left * f_centre < 0.0 {
            right = centre;
        } else {
            left = centre;
            f_left = f_centre;
        }

        if right - left < config.tolerance {
            let centre = 0.5 * (left + right);
            return Ok(found(centre, f(centre), pass));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(0.5 * (left + right)).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// PV of -100 today and +121 in two years.
    fn two_year_pv(r: f64) -> f64 {
        -100.0 + 121.0 * (1.0 + r).powi(-2)
    }

    #[test]
    fn test_two_year_rate() {
        let result = bisection(two_year_pv, -0.5, 1.0, &SolverConfig::new(1e-10, 100)).unwrap();

        assert_relative_eq!(result.root, 0.1, epsilon = 1e-9);
        assert_eq!(result.method, SolverMethod::Bisection);
    }

    #[test]
    fn test_endpoint_order_irrelevant() {
        let config = SolverConfig::new(1e-10, 100);
        let forward = bisection(two_year_pv, -0.5, 1.0, &config).unwrap();
        let backward = bisection(two_year_pv, 1.0, -0.5, &config).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_same_sign_ends_rejected() {
        // Both rates leave PV positive
        let err = bisection(two_year_pv, 0.0, 0.05, &SolverConfig::default()).unwrap_err();

        match err {
            MathError::NoSignChange { lo, hi, f_lo, f_hi } => {
                assert_eq!((lo, hi), (0.0, 0.05));
                assert!(f_lo > 0.0 && f_hi > 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_centre_is_root() {
        let result = bisection(|r: f64| 0.25 - r, -0.5, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 0.25);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_root_at_endpoint() {
        let config = SolverConfig::new(1e-9, 100);

        let lower = bisection(|r: f64| r + 0.999, -0.999, 10.0, &config).unwrap();
        let upper = bisection(|r: f64| 10.0 - r, -0.999, 10.0, &config).unwrap();

        assert_eq!((lower.root, lower.iterations), (-0.999, 0));
        assert_eq!((upper.root, upper.iterations), (10.0, 0));
    }

    #[test]
    fn test_narrow_bracket_ends_search() {
        // Steep enough that |f| never drops under tolerance first
        let f = |r: f64| 1e9 * (r - 0.3);
        let config = SolverConfig::new(1e-7, 100);

        let result = bisection(f, 0.0, 1.0, &config).unwrap();

        assert!((result.root - 0.3).abs() < 1e-7);
        assert!(result.iterations < 30);
    }

    #[test]
    fn test_pass_limit() {
        let config = SolverConfig::new(1e-15, 5);

        let err = bisection(|r: f64| r - 0.3, 0.0, 1.0, &config).unwrap_err();

        assert!(matches!(
            err,
            MathError::ConvergenceFailed { iterations: 5, .. }
        ));
    }
}
