//! # Keel Analytics
//!
//! Cash-flow valuation and rate-of-return analytics.
//!
//! This crate contains the numeric core for irregularly dated cash flows:
//! - **Cash Flows**: Present value and its rate derivative under ACT/365.25
//! - **Rates**: The rate that zeroes present value (XIRR), solved with
//!   bounded Newton-Raphson and a bisection fallback
//! - **Multiples**: Closed-form capital multiples (MOIC, DPI, TVPI, RVPI)
//!
//! ## Architecture
//!
//! `keel-analytics` depends on `keel-core` for the cash-flow types and on
//! `keel-math` for the generic root finders. Every function is pure: no
//! state survives a call, so concurrent callers need no coordination.
//!
//! ## Usage
//!
//! ```rust
//! use keel_analytics::prelude::*;
//!
//! let flows = [CashFlow::new(0.0, -1000.0), CashFlow::new(365.0, 1100.0)];
//!
//! // Sentinel API: NaN when no rate exists
//! let rate = solve_rate(&flows, DEFAULT_INITIAL_GUESS);
//! assert!(present_value(&flows, rate).abs() < 1e-6);
//!
//! // Typed API
//! let solution = RateSolver::default().solve(&flows).unwrap();
//! assert_eq!(solution.rate, rate);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cashflows;
pub mod error;
pub mod multiples;
pub mod rates;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{
        present_value, present_value_derivative, present_value_derivative_with,
        present_value_with,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::multiples::{dpi, moic, rvpi, tvpi, CapitalMultiples};
    pub use crate::rates::{
        solve_rate, solve_rate_dated, RateSolution, RateSolver, RateSolverConfig,
        DEFAULT_INITIAL_GUESS,
    };
    pub use keel_core::types::{CashFlow, DatedCashFlow, RateBounds};
}
