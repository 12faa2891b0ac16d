//! Day count conventions for cash-flow discounting.
//!
//! A day count convention turns an elapsed number of days into a year
//! fraction. Keel discounts irregularly dated cash flows against a single
//! fixed year length, so only one convention is provided:
//!
//! - [`Act36525`]: Actual/365.25 - averages leap years into the basis
//!
//! No holiday or business-day adjustment is applied.
//!
//! # Usage
//!
//! ```rust
//! use keel_core::daycounts::{Act36525, DayCount};
//!
//! let dc = Act36525;
//! assert_eq!(dc.name(), "ACT/365.25");
//! assert_eq!(dc.year_fraction(730.5), 2.0);
//! ```

mod act36525;

pub use act36525::{Act36525, DAYS_PER_YEAR};

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) and stateless.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Converts an elapsed day count (possibly fractional) into years.
    ///
    /// Negative day counts produce negative year fractions.
    fn year_fraction(&self, days: f64) -> f64;
}
