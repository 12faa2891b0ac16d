//! A panel of named indicator series over one price history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bollinger::{bollinger_bands, BollingerBands, DEFAULT_BANDS_PERIOD, DEFAULT_NUM_STD};
use crate::error::IndicatorResult;
use crate::macd::{
    macd, MacdOutput, DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD,
};
use crate::returns::{rolling_volatility, simple_returns};
use crate::rsi::{rsi, DEFAULT_RSI_PERIOD};

/// Parameters for [`IndicatorPanel::compute`].
///
/// Every field has a default, so partial JSON/TOML documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// RSI lookback.
    pub rsi_period: usize,
    /// MACD fast EMA period.
    pub macd_fast: usize,
    /// MACD slow EMA period.
    pub macd_slow: usize,
    /// MACD signal EMA period.
    pub macd_signal: usize,
    /// Bollinger window.
    pub bands_period: usize,
    /// Bollinger width in standard deviations.
    pub bands_num_std: f64,
    /// Number of 1-step returns in each volatility window.
    pub volatility_window: usize,
    /// Horizons, in steps, of the simple-return series.
    pub return_horizons: Vec<usize>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            macd_fast: DEFAULT_FAST_PERIOD,
            macd_slow: DEFAULT_SLOW_PERIOD,
            macd_signal: DEFAULT_SIGNAL_PERIOD,
            bands_period: DEFAULT_BANDS_PERIOD,
            bands_num_std: DEFAULT_NUM_STD,
            volatility_window: 10,
            return_horizons: vec![1, 5, 20],
        }
    }
}

impl PanelConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the RSI lookback.
    #[must_use]
    pub fn with_rsi_period(mut self, period: usize) -> Self {
        self.rsi_period = period;
        self
    }

    /// Sets the MACD periods.
    #[must_use]
    pub fn with_macd(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast = fast;
        self.macd_slow = slow;
        self.macd_signal = signal;
        self
    }

    /// Sets the Bollinger window and width.
    #[must_use]
    pub fn with_bands(mut self, period: usize, num_std: f64) -> Self {
        self.bands_period = period;
        self.bands_num_std = num_std;
        self
    }

    /// Sets the volatility window.
    #[must_use]
    pub fn with_volatility_window(mut self, window: usize) -> Self {
        self.volatility_window = window;
        self
    }

    /// Sets the return horizons.
    #[must_use]
    pub fn with_return_horizons(mut self, horizons: Vec<usize>) -> Self {
        self.return_horizons = horizons;
        self
    }
}

/// Indicator series computed from one price history, all aligned to it.
///
/// # Example
///
/// ```rust
/// use keel_indicators::panel::{IndicatorPanel, PanelConfig};
///
/// let prices: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i % 7)).collect();
/// let panel = IndicatorPanel::compute(&prices, &PanelConfig::default()).unwrap();
///
/// assert_eq!(panel.len(), 60);
/// assert!(panel.series("rsi_14").is_some());
/// assert!(panel.series("returns_5d").is_some());
/// assert!(panel.series("returns_2d").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPanel {
    config: PanelConfig,
    /// Relative strength index.
    pub rsi: Vec<f64>,
    /// MACD line, signal and histogram.
    pub macd: MacdOutput,
    /// Bollinger Bands.
    pub bands: BollingerBands,
    /// Simple returns keyed by horizon.
    pub returns: BTreeMap<usize, Vec<f64>>,
    /// Rolling volatility of 1-step returns.
    pub volatility: Vec<f64>,
}

impl IndicatorPanel {
    /// Computes every configured series.
    ///
    /// Fails if any configured period is invalid for its indicator.
    pub fn compute(prices: &[f64], config: &PanelConfig) -> IndicatorResult<Self> {
        let returns = config
            .return_horizons
            .iter()
            .map(|&h| Ok((h, simple_returns(prices, h)?)))
            .collect::<IndicatorResult<BTreeMap<_, _>>>()?;

        Ok(Self {
            rsi: rsi(prices, config.rsi_period)?,
            macd: macd(prices, config.macd_fast, config.macd_slow, config.macd_signal)?,
            bands: bollinger_bands(prices, config.bands_period, config.bands_num_std)?,
            returns,
            volatility: rolling_volatility(prices, config.volatility_window)?,
            config: config.clone(),
        })
    }

    /// Configuration the panel was computed with.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Number of aligned values in each series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    /// Returns true if the price history was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }

    /// Names of every series, in a stable order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names = vec![
            format!("rsi_{}", self.config.rsi_period),
            "macd".to_string(),
            "macd_signal".to_string(),
            "macd_histogram".to_string(),
            "bb_upper".to_string(),
            "bb_middle".to_string(),
            "bb_lower".to_string(),
        ];
        names.extend(self.returns.keys().map(|h| format!("returns_{h}d")));
        names.push(format!("volatility_{}d", self.config.volatility_window));
        names
    }

    /// Looks up a series by name.
    ///
    /// Accepted names are those listed by [`names`](Self::names).
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        let series: &[f64] = match name {
            "macd" => &self.macd.macd,
            "macd_signal" => &self.macd.signal,
            "macd_histogram" => &self.macd.histogram,
            "bb_upper" => &self.bands.upper,
            "bb_middle" => &self.bands.middle,
            "bb_lower" => &self.bands.lower,
            _ => {
                if let Some(period) = parse_suffixed(name, "rsi_", "") {
                    return (period == self.config.rsi_period).then_some(self.rsi.as_slice());
                }
                if let Some(h) = parse_suffixed(name, "returns_", "d") {
                    return self.returns.get(&h).map(Vec::as_slice);
                }
                if let Some(w) = parse_suffixed(name, "volatility_", "d") {
                    return (w == self.config.volatility_window)
                        .then_some(self.volatility.as_slice());
                }
                return None;
            }
        };
        Some(series)
    }
}

fn parse_suffixed(name: &str, prefix: &str, suffix: &str) -> Option<usize> {
    name.strip_prefix(prefix)?.strip_suffix(suffix)?.parse().ok()
}
