//! Simple returns and rolling volatility.

use crate::error::{check_period, IndicatorResult};

/// Simple return over `horizon` steps: `p[i] / p[i - horizon] - 1`.
///
/// Positions with `i < horizon` or a zero base price hold `0.0`.
///
/// # Example
///
/// ```rust
/// use keel_indicators::returns::simple_returns;
///
/// let r = simple_returns(&[100.0, 110.0, 99.0], 1).unwrap();
/// assert_eq!(r[0], 0.0);
/// assert!((r[1] - 0.10).abs() < 1e-12);
/// assert!((r[2] + 0.10).abs() < 1e-12);
/// ```
pub fn simple_returns(prices: &[f64], horizon: usize) -> IndicatorResult<Vec<f64>> {
    check_period("returns horizon", horizon, 1)?;

    let mut out = vec![0.0; prices.len()];
    for i in horizon..prices.len() {
        let base = prices[i - horizon];
        if base != 0.0 {
            out[i] = prices[i] / base - 1.0;
        }
    }
    Ok(out)
}

/// Sample standard deviation of 1-step returns over a trailing window.
///
/// The value at index `i` uses the `window` returns ending at `i`, so the
/// first value appears at index `window`. Divides by `window - 1`, which
/// makes `window` at least 2.
pub fn rolling_volatility(prices: &[f64], window: usize) -> IndicatorResult<Vec<f64>> {
    check_period("volatility window", window, 2)?;

    let returns = simple_returns(prices, 1)?;
    let mut out = vec![0.0; prices.len()];
    if returns.len() <= window {
        return Ok(out);
    }

    let w = window as f64;
    for (end, chunk) in (window..).zip(returns[1..].windows(window)) {
        let mean = chunk.iter().sum::<f64>() / w;
        let ss = chunk.iter().map(|r| (r - mean).powi(2)).sum::<f64>();
        out[end] = (ss / (w - 1.0)).sqrt();
    }
    Ok(out)
}
