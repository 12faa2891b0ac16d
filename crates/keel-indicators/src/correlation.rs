//! Rolling Pearson correlation.

use crate::error::{check_period, IndicatorError, IndicatorResult};

/// Default window length.
pub const DEFAULT_CORRELATION_WINDOW: usize = 20;

/// Computes the Pearson correlation of `x` and `y` over a trailing window.
///
/// Moments are taken from window sums: `cov = E[xy] - E[x]E[y]` and
/// `std = sqrt(E[x²] - E[x]²)`. A window where either deviation is not
/// strictly positive (a constant window, or rounding that leaves the
/// variance slightly negative) yields `0.0` instead of an undefined value;
/// callers that need to tell the two apart must check variance themselves.
/// Values before the first full window are `0.0`.
///
/// # Example
///
/// ```rust
/// use keel_indicators::correlation::rolling_correlation;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [8.0, 6.0, 4.0, 2.0];
/// let corr = rolling_correlation(&x, &y, 3).unwrap();
/// assert_eq!(corr[..2], [0.0, 0.0]);
/// assert!((corr[3] + 1.0).abs() < 1e-12);
/// ```
pub fn rolling_correlation(x: &[f64], y: &[f64], window: usize) -> IndicatorResult<Vec<f64>> {
    check_period("correlation", window, 1)?;
    if x.len() != y.len() {
        return Err(IndicatorError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let w = window as f64;
    let mut corr = vec![0.0; x.len()];

    for (end, (wx, wy)) in (window - 1..).zip(x.windows(window).zip(y.windows(window))) {
        let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for (&vx, &vy) in wx.iter().zip(wy) {
            sx += vx;
            sy += vy;
            sxx += vx * vx;
            syy += vy * vy;
            sxy += vx * vy;
        }

        let mean_x = sx / w;
        let mean_y = sy / w;
        let cov = sxy / w - mean_x * mean_y;
        let std_x = (sxx / w - mean_x * mean_x).sqrt();
        let std_y = (syy / w - mean_y * mean_y).sqrt();

        // NaN deviations fail both comparisons
        if std_x > 0.0 && std_y > 0.0 {
            corr[end] = cov / (std_x * std_y);
        }
    }

    Ok(corr)
}
