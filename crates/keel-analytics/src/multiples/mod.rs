//! Capital multiples.
//!
//! Closed-form ratios of distributed and residual value to paid-in capital.
//! Each ratio is `f64::NAN` when `total_invested <= 0`.

use serde::{Deserialize, Serialize};

/// Multiple on invested capital: `(distributions + current_value) / invested`.
#[must_use]
pub fn moic(total_distributions: f64, current_value: f64, total_invested: f64) -> f64 {
    ratio(total_distributions + current_value, total_invested)
}

/// Distributed to paid-in: `distributions / invested`.
#[must_use]
pub fn dpi(total_distributions: f64, total_invested: f64) -> f64 {
    ratio(total_distributions, total_invested)
}

/// Total value to paid-in: `(distributions + current_value) / invested`.
///
/// Numerically identical to [`moic`]; kept separate because the two are
/// reported under different names.
#[must_use]
pub fn tvpi(total_distributions: f64, current_value: f64, total_invested: f64) -> f64 {
    ratio(total_distributions + current_value, total_invested)
}

/// Residual value to paid-in: `current_value / invested`.
#[must_use]
pub fn rvpi(current_value: f64, total_invested: f64) -> f64 {
    ratio(current_value, total_invested)
}

fn ratio(numerator: f64, total_invested: f64) -> f64 {
    if total_invested <= 0.0 {
        return f64::NAN;
    }
    numerator / total_invested
}

/// All four capital multiples for one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalMultiples {
    /// Multiple on invested capital.
    pub moic: f64,
    /// Distributed to paid-in.
    pub dpi: f64,
    /// Total value to paid-in.
    pub tvpi: f64,
    /// Residual value to paid-in.
    pub rvpi: f64,
}

impl CapitalMultiples {
    /// Computes every multiple from the three position totals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keel_analytics::multiples::CapitalMultiples;
    ///
    /// let m = CapitalMultiples::compute(600.0, 900.0, 1000.0);
    /// assert_eq!(m.dpi, 0.6);
    /// assert_eq!(m.tvpi, 1.5);
    /// assert!((m.dpi + m.rvpi - m.tvpi).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn compute(total_distributions: f64, current_value: f64, total_invested: f64) -> Self {
        Self {
            moic: moic(total_distributions, current_value, total_invested),
            dpi: dpi(total_distributions, total_invested),
            tvpi: tvpi(total_distributions, current_value, total_invested),
            rvpi: rvpi(current_value, total_invested),
        }
    }

    /// Returns true if every multiple is defined.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !(self.moic.is_nan() || self.dpi.is_nan() || self.tvpi.is_nan() || self.rvpi.is_nan())
    }
}
