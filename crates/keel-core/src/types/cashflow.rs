//! Cash flow types for rate-of-return analytics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A signed amount at a day offset from the first cash flow of its sequence.
///
/// Negative amounts are outflows (capital invested), positive amounts are
/// inflows (distributions). Offsets are conventionally non-negative and
/// non-decreasing, but nothing downstream relies on the ordering.
///
/// # Example
///
/// ```rust
/// use keel_core::types::CashFlow;
///
/// let cf = CashFlow::new(365.0, 1100.0);
/// assert_eq!(cf.offset_days(), 365.0);
/// assert!(cf.is_inflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Days elapsed since the first cash flow (may be fractional)
    offset_days: f64,
    /// Signed monetary amount
    amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub const fn new(offset_days: f64, amount: f64) -> Self {
        Self {
            offset_days,
            amount,
        }
    }

    /// Creates a cash flow, rejecting non-finite values and negative offsets.
    pub fn try_new(offset_days: f64, amount: f64) -> CoreResult<Self> {
        if !offset_days.is_finite() || offset_days < 0.0 {
            return Err(CoreError::invalid_cash_flow(format!(
                "offset must be a finite, non-negative day count, got {offset_days}"
            )));
        }
        if !amount.is_finite() {
            return Err(CoreError::invalid_cash_flow(format!(
                "amount must be finite, got {amount}"
            )));
        }
        Ok(Self::new(offset_days, amount))
    }

    /// Returns the day offset.
    #[must_use]
    pub const fn offset_days(&self) -> f64 {
        self.offset_days
    }

    /// Returns the signed amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true for a positive amount.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true for a negative amount.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }

    /// Converts dated cash flows into day offsets from the earliest date.
    ///
    /// The flows are ordered by date (ties keep their input order) and the
    /// earliest date becomes offset zero.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use keel_core::types::{CashFlow, DatedCashFlow};
    ///
    /// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let flows = CashFlow::from_dated(&[
    ///     DatedCashFlow::new(d(2021, 1, 1), 1100.0),
    ///     DatedCashFlow::new(d(2020, 1, 1), -1000.0),
    /// ]);
    /// assert_eq!(flows[0], CashFlow::new(0.0, -1000.0));
    /// assert_eq!(flows[1].offset_days(), 366.0);
    /// ```
    #[must_use]
    pub fn from_dated(flows: &[DatedCashFlow]) -> Vec<CashFlow> {
        let mut sorted: Vec<&DatedCashFlow> = flows.iter().collect();
        sorted.sort_by_key(|cf| cf.date);

        let Some(first) = sorted.first().map(|cf| cf.date) else {
            return Vec::new();
        };

        sorted
            .into_iter()
            .map(|cf| CashFlow::new((cf.date - first).num_days() as f64, cf.amount))
            .collect()
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2} @ day {}", self.amount, self.offset_days)
    }
}

impl From<(f64, f64)> for CashFlow {
    fn from((offset_days, amount): (f64, f64)) -> Self {
        Self::new(offset_days, amount)
    }
}

/// A signed amount on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedCashFlow {
    /// Payment date
    pub date: NaiveDate,
    /// Signed monetary amount
    pub amount: f64,
}

impl DatedCashFlow {
    /// Creates a new dated cash flow.
    #[must_use]
    pub const fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }
}
