//! Domain types for cash-flow analytics.
//!
//! - [`CashFlow`]: Amount at a day offset from the first flow
//! - [`DatedCashFlow`]: Amount on a calendar date
//! - [`RateBounds`]: Admissible interval for a solved rate

mod cashflow;
mod rate;

pub use cashflow::{CashFlow, DatedCashFlow};
pub use rate::{RateBounds, MAX_RATE, MIN_RATE};
