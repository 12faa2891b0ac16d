//! Relative Strength Index (RSI).
//!
//! Uses Wilder smoothing of average gains and average losses.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period.
//! Edge cases: avg_loss == 0 → RSI = 100; fewer than `period + 1` prices → all zeros.

use crate::error::{check_period, IndicatorResult};

/// Default RSI lookback.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Computes the RSI of a price series.
///
/// The averages are seeded with the simple mean of the first `period`
/// changes and then smoothed with `avg = (avg * (period - 1) + x) / period`
/// at every index from `period` on, the seed index included. Values before
/// index `period` are `0.0`.
///
/// # Example
///
/// ```rust
/// use keel_indicators::rsi::rsi;
///
/// let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(rsi(&prices, 3).unwrap(), vec![0.0, 0.0, 0.0, 100.0, 100.0]);
/// ```
pub fn rsi(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_period("rsi", period, 1)?;

    let n = prices.len();
    let mut result = vec![0.0; n];
    if n <= period {
        return Ok(result);
    }

    // Gain and loss magnitudes; index 0 has no change
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    let p = period as f64;
    let mut avg_gain = gains[1..=period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[1..=period].iter().sum::<f64>() / p;

    for i in period..n {
        avg_gain = (avg_gain * (p - 1.0) + gains[i]) / p;
        avg_loss = (avg_loss * (p - 1.0) + losses[i]) / p;
        result[i] = strength_index(avg_gain, avg_loss);
    }

    Ok(result)
}

fn strength_index(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
