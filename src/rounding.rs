//! Decimal rounding and ceiling-to-significance.
//!
//! # Rounding rule
//!
//! [`round_to`] shifts the decimal point on the *decimal representation*
//! of the value instead of multiplying by a power of ten, so inputs such
//! as `1.005` (stored as `1.00499999999999989...`) round the way they read.
//! Ties are broken toward positive infinity: `2.5 → 3`, `-2.5 → -2`.
//! [`shift_decimal`] exposes the same shift for callers that need to
//! rescale a value (e.g. fraction to percent) before rounding.
//!
//! # Degenerate inputs
//!
//! Neither function validates its arguments. Non-finite values pass
//! through, and [`ceiling`] with a zero significance yields whatever IEEE
//! division produces (`NaN` or an infinity).

/// Rounds `value` to `precision` decimal places, ties toward +∞.
///
/// Negative zero results are normalized to `0.0`. Non-finite input is
/// returned unchanged.
///
/// # Examples
/// ```
/// use u_numkit::rounding::round_to;
/// assert_eq!(round_to(45.6749, 2), 45.67);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -2.0);
/// ```
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let exponent = precision as i32;
    let shifted = shift_decimal(value, exponent);
    let rounded = round_half_up(shifted);
    // Adding +0.0 turns -0.0 into +0.0 and leaves everything else intact.
    shift_decimal(rounded, -exponent) + 0.0
}

/// Returns the smallest multiple of `significance` that is `>= value`.
///
/// Computed literally as `ceil(value / significance) * significance`.
/// A negative significance therefore rounds toward zero on the negated
/// scale, and a zero significance produces IEEE artifacts.
///
/// # Examples
/// ```
/// use u_numkit::rounding::ceiling;
/// assert_eq!(ceiling(7.0, 5.0), 10.0);
/// assert_eq!(ceiling(10.0, 5.0), 10.0);
/// assert_eq!(ceiling(-7.0, 5.0), -5.0);
/// assert!(ceiling(1.0, 0.0).is_nan());
/// ```
pub fn ceiling(value: f64, significance: f64) -> f64 {
    (value / significance).ceil() * significance
}

/// Moves the decimal point of `value` by `exponent` places.
///
/// The shortest round-trip rendering of `value` is re-parsed with an
/// exponent suffix, so the result is the double nearest the shifted
/// decimal rather than the binary product `value * 10^exponent`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::shift_decimal;
/// assert_ne!(0.00085 * 100.0, 0.085);
/// assert_eq!(shift_decimal(0.00085, 2), 0.085);
/// assert_eq!(shift_decimal(4567.0, -2), 45.67);
/// ```
pub fn shift_decimal(value: f64, exponent: i32) -> f64 {
    format!("{value}e{exponent}")
        .parse()
        .unwrap_or_else(|_| value * 10_f64.powi(exponent))
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- round_to ---

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(45.67, 2), 45.67);
        assert_eq!(round_to(45.674, 2), 45.67);
        assert_eq!(round_to(45.675, 2), 45.68);
    }

    #[test]
    fn test_round_to_decimal_representation() {
        // 1.005 * 100.0 == 100.49999999999999 in binary.
        assert_eq!(round_to(1.005, 2), 1.01);
    }

    #[test]
    fn test_round_to_ties_toward_positive_infinity() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-0.5, 0), 0.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn test_round_to_integer_unchanged() {
        assert_eq!(round_to(100.0, 2), 100.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_normalizes_negative_zero() {
        let r = round_to(-0.001, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_round_to_small_magnitudes() {
        assert_eq!(round_to(1e-7, 2), 0.0);
        assert_eq!(round_to(0.000_05, 4), 0.0001);
    }

    #[test]
    fn test_shift_decimal_avoids_binary_product() {
        assert_eq!(shift_decimal(0.00085, 2), 0.085);
        assert_eq!(shift_decimal(0.01005, 2), 1.005);
        assert_eq!(shift_decimal(-0.25, 2), -25.0);
    }

    #[test]
    fn test_shift_decimal_non_finite() {
        assert!(shift_decimal(f64::NAN, 2).is_nan());
        assert_eq!(shift_decimal(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
    }

    // --- ceiling ---

    #[test]
    fn test_ceiling_rounds_up() {
        assert_eq!(ceiling(7.0, 5.0), 10.0);
    }

    #[test]
    fn test_ceiling_exact_multiple() {
        assert_eq!(ceiling(10.0, 5.0), 10.0);
    }

    #[test]
    fn test_ceiling_negative_value() {
        assert_eq!(ceiling(-7.0, 5.0), -5.0);
    }

    #[test]
    fn test_ceiling_negative_significance() {
        // ceil(-1.4) = -1, times -5.
        assert_eq!(ceiling(7.0, -5.0), 5.0);
        assert_eq!(ceiling(-7.0, -5.0), -10.0);
    }

    #[test]
    fn test_ceiling_fractional_significance() {
        assert_eq!(ceiling(1.2, 0.5), 1.5);
    }

    #[test]
    fn test_ceiling_zero_significance() {
        assert!(ceiling(1.0, 0.0).is_nan());
        assert!(ceiling(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_ceiling_deterministic() {
        assert_eq!(ceiling(3.3, 0.25).to_bits(), ceiling(3.3, 0.25).to_bits());
    }
}
