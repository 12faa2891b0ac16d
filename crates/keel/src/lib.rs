//! # Keel
//!
//! Numeric core for investment analytics: present value and internal rate
//! of return of irregularly dated cash flows, capital multiples, and
//! technical indicators over price series.
//!
//! This crate re-exports the public API of the workspace:
//!
//! - [`core`]: `CashFlow`, `DatedCashFlow`, `RateBounds`, the ACT/365.25 day count
//! - [`math`]: Newton-Raphson, bisection and hybrid root finders
//! - [`analytics`]: present value, the rate solver, capital multiples
//! - [`indicators`]: RSI, MACD, Bollinger Bands, rolling correlation, panels
//!
//! Every function is pure and reentrant. Nothing is cached or shared
//! between calls, so independent inputs can be processed from any number
//! of threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use keel::prelude::*;
//!
//! let flows = [CashFlow::new(0.0, -1000.0), CashFlow::new(365.25, 1100.0)];
//! let rate = solve_rate(&flows, DEFAULT_INITIAL_GUESS);
//! assert!((rate - 0.10).abs() < 1e-6);
//!
//! let prices = [10.0, 11.0, 12.0, 13.0];
//! assert_eq!(rsi(&prices, 2).unwrap()[3], 100.0);
//! ```

#![warn(missing_docs)]

pub use keel_analytics as analytics;
pub use keel_core as core;
pub use keel_indicators as indicators;
pub use keel_math as math;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use keel_analytics::prelude::*;
    pub use keel_core::daycounts::{Act36525, DayCount};
    pub use keel_core::error::{CoreError, CoreResult};
    pub use keel_indicators::prelude::*;
    pub use keel_math::error::{MathError, MathResult};
}
