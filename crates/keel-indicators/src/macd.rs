//! MACD (Moving Average Convergence Divergence) indicator.

use serde::{Deserialize, Serialize};

use crate::error::{check_period, IndicatorResult};
use crate::moving_averages::{ema, ema_seeded_at};

/// Default fast EMA period.
pub const DEFAULT_FAST_PERIOD: usize = 12;
/// Default slow EMA period.
pub const DEFAULT_SLOW_PERIOD: usize = 26;
/// Default signal EMA period.
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

/// The three MACD series, each aligned to the input prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA.
    pub macd: Vec<f64>,
    /// EMA of the MACD line, seeded at the slow period's index.
    pub signal: Vec<f64>,
    /// MACD line minus signal line.
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    /// Number of aligned values in each series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    /// Returns true if the input was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// Computes MACD, its signal line and histogram.
///
/// Both price EMAs start at the first price, so `macd[0]` is zero. The
/// signal line starts at `macd[slow_period]`; signal and histogram are zero
/// up to and including that index, and zero throughout when the series has
/// no more than `slow_period` prices. `fast_period` need not be shorter
/// than `slow_period`.
///
/// # Example
///
/// ```rust
/// use keel_indicators::macd::macd;
///
/// let prices: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i)).collect();
/// let out = macd(&prices, 12, 26, 9).unwrap();
/// assert_eq!(out.len(), 40);
/// assert!(out.macd[39] > 0.0);
/// ```
pub fn macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdOutput> {
    check_period("macd fast", fast_period, 1)?;
    check_period("macd slow", slow_period, 1)?;
    check_period("macd signal", signal_period, 1)?;

    let fast = ema(prices, fast_period)?;
    let slow = ema(prices, slow_period)?;

    let mut line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    if let Some(first) = line.first_mut() {
        *first = 0.0;
    }

    let signal = ema_seeded_at(&line, signal_period, slow_period)?;
    let histogram = line
        .iter()
        .zip(&signal)
        .enumerate()
        .map(|(i, (m, s))| if i > slow_period { m - s } else { 0.0 })
        .collect();

    Ok(MacdOutput {
        macd: line,
        signal,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moving_averages::ema_alpha;
    use approx::assert_relative_eq;

    fn trending(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + (i as f64) * 0.5).collect()
    }

    #[test]
    fn test_macd_flat_prices_are_zero() {
        let out = macd(&[42.0; 50], 12, 26, 9).unwrap();
        assert!(out.macd.iter().all(|&v| v == 0.0));
        assert!(out.signal.iter().all(|&v| v == 0.0));
        assert!(out.histogram.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_macd_uptrend_positive() {
        let out = macd(&trending(60), 12, 26, 9).unwrap();
        assert_eq!(out.macd[0], 0.0);
        assert!(out.macd[1..].iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_macd_signal_seed() {
        let prices = trending(40);
        let out = macd(&prices, 3, 6, 4).unwrap();

        assert!(out.signal[..6].iter().all(|&v| v == 0.0));
        assert_eq!(out.signal[6], out.macd[6]);
        assert!(out.histogram[..=6].iter().all(|&v| v == 0.0));

        let alpha = ema_alpha(4);
        let expected = alpha * out.macd[7] + (1.0 - alpha) * out.signal[6];
        assert_relative_eq!(out.signal[7], expected);
        assert_relative_eq!(out.histogram[7], out.macd[7] - out.signal[7]);
    }

    #[test]
    fn test_macd_short_series_has_no_signal() {
        let out = macd(&trending(26), 12, 26, 9).unwrap();
        assert_eq!(out.len(), 26);
        assert!(out.macd[25] > 0.0);
        assert!(out.signal.iter().all(|&v| v == 0.0));
        assert!(out.histogram.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_macd_empty() {
        let out = macd(&[], 12, 26, 9).unwrap();
        assert!(out.is_empty());
        assert!(out.signal.is_empty() && out.histogram.is_empty());
    }

    #[test]
    fn test_macd_inverted_periods_accepted() {
        let out = macd(&trending(40), 26, 12, 9).unwrap();
        assert!(out.macd[39] < 0.0);
    }

    #[test]
    fn test_macd_zero_period_rejected() {
        assert!(macd(&[1.0], 0, 26, 9).is_err());
        assert!(macd(&[1.0], 12, 0, 9).is_err());
        assert!(macd(&[1.0], 12, 26, 0).is_err());
    }
}
