//! Actual/365.25 day count convention.

use super::DayCount;

/// Length of the averaged year, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Actual/365.25 day count convention.
///
/// The numerator is the actual number of elapsed days; the denominator is
/// an averaged Julian year of 365.25 days.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365.25}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act36525;

impl DayCount for Act36525 {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}
