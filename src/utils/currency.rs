//! Currency formatting utilities for Brazilian real amounts
//!
//! Amounts arrive from the payment API as plain decimal numbers; reports show
//! them the way the back office reads them (`R$ 1.234,56`).

/// Format an amount as Brazilian reais with `.` thousand separators and `,`
/// decimal separator
///
/// # Examples
/// ```
/// use pix_monitor::utils::currency::format_brl;
///
/// assert_eq!(format_brl(1234.5), "R$ 1.234,50");
/// assert_eq!(format_brl(0.0), "R$ 0,00");
/// assert_eq!(format_brl(-15.0), "-R$ 15,00");
/// ```
pub fn format_brl(amount: f64) -> String {
    if !amount.is_finite() {
        return "R$ 0,00".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format a transaction count with `.` thousand separators
///
/// # Examples
/// ```
/// use pix_monitor::utils::currency::format_count;
///
/// assert_eq!(format_count(1234567), "1.234.567");
/// ```
pub fn format_count(count: u64) -> String {
    group_thousands(count)
}

/// Format a percentage with one decimal place and a decimal comma
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent).replace('.', ",")
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }

    result
}
