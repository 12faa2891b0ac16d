//! Moving averages shared by the indicators.
//!
//! All functions return a series aligned to the input index with `0.0` in
//! every position that has no value yet.

use crate::error::{check_period, IndicatorResult};

/// Smoothing factor `2 / (period + 1)` of an exponential moving average.
#[must_use]
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Exponential moving average seeded with the first value.
///
/// # Example
///
/// ```rust
/// use keel_indicators::moving_averages::ema;
///
/// let smoothed = ema(&[10.0, 20.0, 20.0], 3).unwrap();
/// assert_eq!(smoothed, vec![10.0, 15.0, 17.5]);
/// ```
pub fn ema(values: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    ema_seeded_at(values, period, 0)
}

/// Exponential moving average seeded with `values[seed]`.
///
/// Positions before `seed` hold `0.0`. If `seed` is past the end the whole
/// output is zero.
pub fn ema_seeded_at(values: &[f64], period: usize, seed: usize) -> IndicatorResult<Vec<f64>> {
    check_period("ema", period, 1)?;

    let mut out = vec![0.0; values.len()];
    let Some(&first) = values.get(seed) else {
        return Ok(out);
    };

    let alpha = ema_alpha(period);
    out[seed] = first;
    for i in seed + 1..values.len() {
        out[i] = alpha * values[i] + (1.0 - alpha) * out[i - 1];
    }
    Ok(out)
}

/// Simple moving average over a trailing window.
///
/// The first `window - 1` positions hold `0.0`.
pub fn sma(values: &[f64], window: usize) -> IndicatorResult<Vec<f64>> {
    check_period("sma", window, 1)?;

    let mut out = vec![0.0; values.len()];
    for (end, chunk) in (window - 1..).zip(values.windows(window)) {
        out[end] = chunk.iter().sum::<f64>() / window as f64;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha() {
        assert_relative_eq!(ema_alpha(9), 0.2);
        assert_relative_eq!(ema_alpha(1), 1.0);
    }

    #[test]
    fn test_ema_tracks_constant() {
        let values = [5.0; 10];
        assert!(ema(&values, 4).unwrap().iter().all(|&v| v == 5.0));
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        let values = [1.0, 4.0, 2.0, 8.0];
        assert_eq!(ema(&values, 1).unwrap(), values.to_vec());
    }

    #[test]
    fn test_ema_seeded_later() {
        let values = [100.0, 100.0, 1.0, 3.0];
        let out = ema_seeded_at(&values, 3, 2).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 1.0, 2.0]);

        let out = ema_seeded_at(&values, 3, 4).unwrap();
        assert_eq!(out, vec![0.0; 4]);
    }

    #[test]
    fn test_ema_empty() {
        assert!(ema(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn test_sma() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = sma(&values, 3).unwrap();
        assert_eq!(out, vec![0.0, 0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_sma_window_longer_than_input() {
        assert_eq!(sma(&[1.0, 2.0], 5).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            ema(&[1.0], 0),
            Err(IndicatorError::InvalidPeriod { value: 0, .. })
        ));
        assert!(sma(&[1.0], 0).is_err());
    }
}
