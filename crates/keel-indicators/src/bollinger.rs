//! Bollinger Bands.
//!
//! Middle band = SMA(period); upper/lower = middle ± num_std * population std.
//! Lookback: period - 1.

use serde::{Deserialize, Serialize};

use crate::error::{check_period, IndicatorResult};
use crate::moving_averages::sma;

/// Default window length.
pub const DEFAULT_BANDS_PERIOD: usize = 20;
/// Default band width in standard deviations.
pub const DEFAULT_NUM_STD: f64 = 2.0;

/// Upper, middle and lower bands, each aligned to the input prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BollingerBands {
    /// Mean plus `num_std` deviations.
    pub upper: Vec<f64>,
    /// Rolling mean.
    pub middle: Vec<f64>,
    /// Mean minus `num_std` deviations.
    pub lower: Vec<f64>,
}

/// Computes Bollinger Bands over a trailing window.
///
/// The deviation divides by `period`, not `period - 1`. All three bands
/// are `0.0` before the first full window.
///
/// # Example
///
/// ```rust
/// use keel_indicators::bollinger::bollinger_bands;
///
/// let bands = bollinger_bands(&[1.0, 3.0, 1.0, 3.0], 2, 2.0).unwrap();
/// assert_eq!(bands.middle, vec![0.0, 2.0, 2.0, 2.0]);
/// assert_eq!(bands.upper[1], 4.0);
/// assert_eq!(bands.lower[1], 0.0);
/// ```
pub fn bollinger_bands(prices: &[f64], period: usize, num_std: f64) -> IndicatorResult<BollingerBands> {
    check_period("bands", period, 1)?;

    let middle = sma(prices, period)?;
    let mut upper = vec![0.0; prices.len()];
    let mut lower = vec![0.0; prices.len()];

    for (end, window) in (period - 1..).zip(prices.windows(period)) {
        let mean = middle[end];
        let variance = window.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / period as f64;
        let std = variance.sqrt();
        upper[end] = mean + num_std * std;
        lower[end] = mean - num_std * std;
    }

    Ok(BollingerBands {
        upper,
        middle,
        lower,
    })
}
