//! Number and percentage rendering.
//!
//! Numbers are rendered in their shortest round-trip decimal form with
//! no trailing `.0`, so whole percentages print as `100%` rather than
//! `100.0%`. Magnitudes at or above `1e21`, or below `1e-6`, switch to
//! exponent form (`1e+21`, `1e-7`). Non-finite values are spelled out
//! (`NaN`, `Infinity`, `-Infinity`) instead of Rust's `NaN` / `inf`.
//!
//! Percentages scale the fraction with [`shift_decimal`], never with a
//! binary `* 100.0`, so `0.00085` is treated as exactly `0.085%` before
//! [`round_to`] breaks the tie upward.

use crate::rounding::{round_to, shift_decimal};

/// Decimal places kept by [`format_percentage`].
pub const PERCENTAGE_PRECISION: u32 = 2;

/// Magnitude from which [`format_number`] uses exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero values use exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Renders `value` as a plain decimal string.
///
/// # Examples
/// ```
/// use u_numkit::format::format_number;
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(45.67), "45.67");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        return format_exponent(value);
    }
    value.to_string()
}

/// `{:e}` renders `1e21`; positive exponents get an explicit `+`.
fn format_exponent(value: f64) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// Formats a fraction as a percentage with up to two decimal places.
///
/// The fraction is moved two decimal places with [`shift_decimal`],
/// rounded with [`round_to`] (ties toward +∞) and suffixed with `%`. Any
/// input is accepted; non-finite values propagate into the text.
///
/// # Examples
/// ```
/// use u_numkit::format::format_percentage;
/// assert_eq!(format_percentage(0.4567), "45.67%");
/// assert_eq!(format_percentage(1.0), "100%");
/// assert_eq!(format_percentage(0.0), "0%");
/// assert_eq!(format_percentage(0.00085), "0.09%");
/// ```
pub fn format_percentage(value: f64) -> String {
    let percent = round_to(shift_decimal(value, 2), PERCENTAGE_PRECISION);
    format!("{}%", format_number(percent))
}
