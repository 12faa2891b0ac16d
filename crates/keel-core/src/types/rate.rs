//! Admissible rate domain for solved rates.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest rate the solver will consider (a 99.9% annual loss).
pub const MIN_RATE: f64 = -0.999;

/// Highest rate the solver will consider (a 1000% annual gain).
pub const MAX_RATE: f64 = 10.0;

/// Closed interval `[min, max]` of admissible periodic rates.
///
/// Conceptually a rate lives in `(-1, +inf)`; the bounds keep the discount
/// base `1 + rate` strictly positive and the iteration away from overflow.
///
/// # Example
///
/// ```rust
/// use keel_core::types::RateBounds;
///
/// let bounds = RateBounds::default();
/// assert_eq!(bounds.clamp(25.0), 10.0);
/// assert!(bounds.contains(0.1));
/// assert!(!bounds.contains(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBounds {
    /// Lower bound (inclusive for clamping)
    pub min: f64,
    /// Upper bound (inclusive for clamping)
    pub max: f64,
}

impl Default for RateBounds {
    fn default() -> Self {
        Self {
            min: MIN_RATE,
            max: MAX_RATE,
        }
    }
}

impl RateBounds {
    /// Creates validated rate bounds.
    ///
    /// Requires `-1 < min < max` with both ends finite.
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks the `new` invariants on bounds built some other way (a
    /// struct literal or a deserialized config).
    pub fn validate(&self) -> CoreResult<()> {
        let Self { min, max } = *self;
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::invalid_rate_bounds(min, max, "bounds must be finite"));
        }
        if min <= -1.0 {
            return Err(CoreError::invalid_rate_bounds(
                min,
                max,
                "lower bound must keep 1 + rate positive",
            ));
        }
        if min >= max {
            return Err(CoreError::invalid_rate_bounds(
                min,
                max,
                "lower bound must be below upper bound",
            ));
        }
        Ok(())
    }

    /// Truncates a rate into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, rate: f64) -> f64 {
        rate.max(self.min).min(self.max)
    }

    /// Returns true if the rate lies strictly inside `(min, max)`.
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        rate > self.min && rate < self.max
    }

    /// Returns the bounds as a tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let b = RateBounds::default();
        assert_eq!(b.as_tuple(), (-0.999, 10.0));
    }

    #[test]
    fn test_clamp() {
        let b = RateBounds::default();
        assert_eq!(b.clamp(-5.0), MIN_RATE);
        assert_eq!(b.clamp(11.0), MAX_RATE);
        assert_eq!(b.clamp(0.25), 0.25);
    }

    #[test]
    fn test_contains_is_open() {
        let b = RateBounds::default();
        assert!(!b.contains(MIN_RATE));
        assert!(!b.contains(MAX_RATE));
        assert!(b.contains(-0.5));
        assert!(!b.contains(f64::NAN));
    }

    #[test]
    fn test_validate_literal_bounds() {
        assert!(RateBounds::default().validate().is_ok());
        assert!(RateBounds { min: 1.0, max: 0.5 }.validate().is_err());
        assert!(RateBounds { min: f64::NAN, max: 0.5 }.validate().is_err());
    }

    #[test]
    fn test_new_validation() {
        assert!(RateBounds::new(-1.0, 1.0).is_err());
        assert!(RateBounds::new(0.5, 0.5).is_err());
        assert!(RateBounds::new(0.0, f64::INFINITY).is_err());
        assert_eq!(
            RateBounds::new(-0.5, 2.0).unwrap(),
            RateBounds { min: -0.5, max: 2.0 }
        );
    }
}
