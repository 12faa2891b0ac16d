//! # Keel Indicators
//!
//! Technical indicators over plain price buffers.
//!
//! Every indicator returns series aligned to its input: output length always
//! equals input length, and positions without enough history hold `0.0`.
//! Zero is only a placeholder. Callers that need to know where a series is
//! warmed up should use the lookback of the indicator they asked for:
//!
//! | Indicator | First value at |
//! |---|---|
//! | [`rsi`](rsi::rsi) | `period` |
//! | [`macd`](macd::macd) line | `1` (signal and histogram: `slow_period + 1`) |
//! | [`bollinger_bands`](bollinger::bollinger_bands) | `period - 1` |
//! | [`rolling_correlation`](correlation::rolling_correlation) | `window - 1` |
//! | [`simple_returns`](returns::simple_returns) | `horizon` |
//! | [`rolling_volatility`](returns::rolling_volatility) | `window` |
//!
//! ## Usage
//!
//! ```rust
//! use keel_indicators::prelude::*;
//!
//! let prices: Vec<f64> = (0..100).map(|i| 50.0 + f64::from(i).sqrt()).collect();
//!
//! let strength = rsi(&prices, DEFAULT_RSI_PERIOD).unwrap();
//! assert_eq!(strength.len(), prices.len());
//! assert_eq!(strength[99], 100.0);
//!
//! let bands = bollinger_bands(&prices, 20, 2.0).unwrap();
//! assert!(bands.upper[99] > bands.lower[99]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::needless_range_loop)]

pub mod bollinger;
pub mod correlation;
pub mod error;
pub mod macd;
pub mod moving_averages;
pub mod panel;
pub mod returns;
pub mod rsi;

pub use error::{IndicatorError, IndicatorResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bollinger::{
        bollinger_bands, BollingerBands, DEFAULT_BANDS_PERIOD, DEFAULT_NUM_STD,
    };
    pub use crate::correlation::{rolling_correlation, DEFAULT_CORRELATION_WINDOW};
    pub use crate::error::{IndicatorError, IndicatorResult};
    pub use crate::macd::{
        macd, MacdOutput, DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD,
    };
    pub use crate::moving_averages::{ema, sma};
    pub use crate::panel::{IndicatorPanel, PanelConfig};
    pub use crate::returns::{rolling_volatility, simple_returns};
    pub use crate::rsi::{rsi, DEFAULT_RSI_PERIOD};
}
