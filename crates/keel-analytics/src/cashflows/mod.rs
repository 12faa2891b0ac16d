//! Cash-flow valuation.
//!
//! Discounts a sequence of [`CashFlow`]s to the date of the first flow:
//!
//! $$PV(r) = \sum_i \frac{CF_i}{(1 + r)^{t_i}}$$
//!
//! $$\frac{dPV}{dr} = \sum_i \frac{-t_i \, CF_i}{(1 + r)^{t_i + 1}}$$
//!
//! where `t_i` is the day offset converted to years with [`Act36525`].
//!
//! Both functions require `1 + rate > 0`; outside that domain the powers are
//! undefined and the result is NaN or infinite. An empty sequence values to
//! zero.

use keel_core::daycounts::{Act36525, DayCount};
use keel_core::types::CashFlow;

/// Present value of `cash_flows` at `rate` under ACT/365.25.
///
/// # Example
///
/// ```rust
/// use keel_analytics::cashflows::present_value;
/// use keel_core::types::CashFlow;
///
/// let flows = [CashFlow::new(0.0, -100.0), CashFlow::new(365.25, 110.0)];
/// assert!(present_value(&flows, 0.10).abs() < 1e-12);
/// ```
#[must_use]
pub fn present_value(cash_flows: &[CashFlow], rate: f64) -> f64 {
    present_value_with(&Act36525, cash_flows, rate)
}

/// Derivative of [`present_value`] with respect to `rate`.
#[must_use]
pub fn present_value_derivative(cash_flows: &[CashFlow], rate: f64) -> f64 {
    present_value_derivative_with(&Act36525, cash_flows, rate)
}

/// Present value under an explicit day count convention.
#[must_use]
pub fn present_value_with<D>(day_count: &D, cash_flows: &[CashFlow], rate: f64) -> f64
where
    D: DayCount + ?Sized,
{
    let base = 1.0 + rate;
    cash_flows
        .iter()
        .map(|cf| {
            let years = day_count.year_fraction(cf.offset_days());
            cf.amount() / base.powf(years)
        })
        .sum()
}

/// Rate derivative of present value under an explicit day count convention.
#[must_use]
pub fn present_value_derivative_with<D>(day_count: &D, cash_flows: &[CashFlow], rate: f64) -> f64
where
    D: DayCount + ?Sized,
{
    let base = 1.0 + rate;
    cash_flows
        .iter()
        .map(|cf| {
            let years = day_count.year_fraction(cf.offset_days());
            -years * cf.amount() / base.powf(years + 1.0)
        })
        .sum()
}
