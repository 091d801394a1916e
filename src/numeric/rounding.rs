// ============================================================================
// Rounding
// Round-half-up to a fixed number of decimal places
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// From 2^52 up every f64 is an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Largest power of ten a `Decimal` can hold (10^28).
const MAX_DECIMAL_EXPONENT: u32 = 28;

/// Round `value` to `places` decimal places.
///
/// Ties are resolved toward positive infinity (round-half-up), so
/// `2.5 -> 3.0` and `-2.5 -> -2.0`.
///
/// `places` is not validated. A negative value rounds to the left of the
/// decimal point: `round_double(-1, 1234.0) == 1230.0`,
/// `round_double(-2, 1250.0) == 1300.0`.
///
/// NaN and infinities are returned unchanged, and so is any value that
/// is already integral at the requested precision (or would overflow when
/// scaled). Negative `places` beyond the range of `f64` round to zero.
///
/// # Example
/// ```
/// use quiz_kit::numeric::round_double;
///
/// assert_eq!(round_double(2, 3.14159), 3.14);
/// assert_eq!(round_double(0, 2.7), 3.0);
/// ```
pub fn round_double(places: i32, value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(places.saturating_abs());
    let rounded = if places >= 0 {
        let scaled = value * scale;
        if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
            value
        } else {
            round_half_up(scaled) / scale
        }
    } else if !scale.is_finite() {
        0.0
    } else {
        let shifted = round_half_up(value / scale) * scale;
        if shifted.is_finite() {
            shifted
        } else {
            value
        }
    };

    tracing::trace!(places, value, rounded, "round_double");
    rounded
}

/// Round-half-up to the nearest integer.
///
/// `floor(x + 0.5)` misrounds values just below one half, so the fractional
/// part is compared instead.
#[inline]
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Exact base-10 counterpart of [`round_double`].
///
/// Uses the same round-half-up rule and the same treatment of negative
/// `places`. Rounding past the magnitude a `Decimal` can represent yields
/// zero.
///
/// # Example
/// ```
/// use quiz_kit::numeric::round_decimal;
/// use rust_decimal::Decimal;
///
/// let x = Decimal::new(1005, 3); // 1.005
/// assert_eq!(round_decimal(2, x), Decimal::new(101, 2));
/// ```
pub fn round_decimal(places: i32, value: Decimal) -> Decimal {
    // Half-up is "away from zero" above zero and "toward zero" below it.
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };

    if places >= 0 {
        return value.round_dp_with_strategy(places.unsigned_abs(), strategy);
    }

    let exponent = places.unsigned_abs();
    if exponent > MAX_DECIMAL_EXPONENT {
        return Decimal::ZERO;
    }

    let scale = (0..exponent).fold(Decimal::ONE, |acc, _| acc * Decimal::TEN);
    let shifted = (value / scale).round_dp_with_strategy(0, strategy);
    shifted.checked_mul(scale).unwrap_or(Decimal::ZERO)
}
