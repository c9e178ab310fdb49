//! Mathematical utility functions for charge statistics
//!
//! This module provides standardised percentage and average calculations
//! with proper zero-division handling, so that an empty bucket never turns
//! into `NaN` on its way to a report.

/// Calculate a percentage of a monetary total, returning 0.0 unless the total is positive.
///
/// # Arguments
/// * `part` - The numerator (amount in one status bucket)
/// * `total` - The denominator (total amount)
///
/// # Returns
/// Percentage as a float (0.0 to 100.0), or 0.0 if total is zero or negative.
///
/// # Examples
/// ```
/// use pix_monitor::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50.0, 100.0), 50.0);
/// assert_eq!(safe_percentage(1.0, 4.0), 25.0);
/// assert_eq!(safe_percentage(0.0, 100.0), 0.0);
/// assert_eq!(safe_percentage(50.0, 0.0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        0.0
    } else {
        (part / total) * 100.0
    }
}

/// Calculate the average amount per transaction, returning 0.0 if there are
/// no transactions.
///
/// # Examples
/// ```
/// use pix_monitor::utils::math::safe_average;
///
/// assert_eq!(safe_average(350.0, 7), 50.0);
/// assert_eq!(safe_average(350.0, 0), 0.0);
/// ```
#[inline]
pub fn safe_average(total: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
