//! Property-based tests for the core domain types.
//!
//! - Dated flows convert to non-negative, non-decreasing day offsets
//! - Conversion keeps every amount
//! - Clamping always lands inside validated bounds

use chrono::{Duration, NaiveDate};
use keel_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Dated flows in arbitrary order within about thirty years of 2000-01-01.
fn dated_flows() -> impl Strategy<Value = Vec<DatedCashFlow>> {
    prop::collection::vec((0i64..11_000, -1.0e6f64..1.0e6), 0..40).prop_map(|raw| {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        raw.into_iter()
            .map(|(days, amount)| DatedCashFlow::new(base + Duration::days(days), amount))
            .collect()
    })
}

/// Valid `(min, max)` pairs.
fn bounds() -> impl Strategy<Value = RateBounds> {
    (-0.99f64..5.0, 0.001f64..20.0)
        .prop_filter_map("bounds must validate", |(min, width)| {
            RateBounds::new(min, min + width).ok()
        })
}

// =============================================================================
// PROPERTY: DATED CONVERSION
// =============================================================================

proptest! {
    #[test]
    fn property_offsets_start_at_zero_and_never_decrease(flows in dated_flows()) {
        let converted = CashFlow::from_dated(&flows);

        prop_assert_eq!(converted.len(), flows.len());
        if let Some(first) = converted.first() {
            prop_assert_eq!(first.offset_days(), 0.0);
        }
        for pair in converted.windows(2) {
            prop_assert!(pair[0].offset_days() >= 0.0);
            prop_assert!(pair[0].offset_days() <= pair[1].offset_days());
        }
    }

    #[test]
    fn property_conversion_keeps_amounts(flows in dated_flows()) {
        let converted = CashFlow::from_dated(&flows);

        let mut before: Vec<f64> = flows.iter().map(|cf| cf.amount).collect();
        let mut after: Vec<f64> = converted.iter().map(CashFlow::amount).collect();
        before.sort_by(f64::total_cmp);
        after.sort_by(f64::total_cmp);

        prop_assert_eq!(before, after);
    }

    #[test]
    fn property_offsets_match_act36525_years(flows in dated_flows()) {
        let converted = CashFlow::from_dated(&flows);
        let earliest = flows.iter().map(|cf| cf.date).min();
        let latest = flows.iter().map(|cf| cf.date).max();

        if let (Some(earliest), Some(latest), Some(last)) = (earliest, latest, converted.last()) {
            let span = (latest - earliest).num_days() as f64;
            prop_assert_eq!(last.offset_days(), span);
            prop_assert_eq!(Act36525.year_fraction(span), span / 365.25);
        }
    }
}

// =============================================================================
// PROPERTY: RATE BOUNDS
// =============================================================================

proptest! {
    #[test]
    fn property_clamp_lands_inside(b in bounds(), rate in -100.0f64..100.0) {
        let clamped = b.clamp(rate);

        prop_assert!(clamped >= b.min && clamped <= b.max);
        if b.contains(rate) {
            prop_assert_eq!(clamped, rate);
        }
    }

    #[test]
    fn property_clamp_is_idempotent(b in bounds(), rate in -100.0f64..100.0) {
        let once = b.clamp(rate);
        prop_assert_eq!(b.clamp(once), once);
    }

    #[test]
    fn property_valid_bounds_keep_discount_base_positive(b in bounds()) {
        prop_assert!(b.validate().is_ok());
        prop_assert!(1.0 + b.min > 0.0);
    }
}
