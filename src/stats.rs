//! Sum and average over numeric slices.
//!
//! Both functions accept any slice, including an empty one, and never
//! fail. Non-finite elements propagate through IEEE arithmetic.
//!
//! # Algorithms
//!
//! - **Sum**: plain left-to-right fold from `0.0`. No compensation is
//!   applied, so results match naive accumulation bit for bit.
//! - **Average**: `sum / len`, with the empty slice mapped to `0.0`.

/// Computes the arithmetic sum of `values`.
///
/// Accumulates left to right starting from `0.0`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_numkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, &v| acc + v)
}

/// Computes the arithmetic mean of `values`.
///
/// # Returns
/// - `0.0` if `values` is empty.
/// - `sum(values) / values.len()` otherwise.
///
/// # Examples
/// ```
/// use u_numkit::stats::average;
/// assert_eq!(average(&[2.0, 4.0, 6.0]), 4.0);
/// assert_eq!(average(&[]), 0.0);
/// ```
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
