//! Calendar-day utilities for date-window fan-out
//!
//! The payment API is queried one calendar day at a time, so every range
//! operation starts by turning a window into its list of days.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Wire format for dates in query strings and API payloads
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Enumerate every calendar day in `[from, to]`, inclusive and in order.
///
/// Returns an empty vector when `from > to`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pix_monitor::utils::time::days_in_window;
///
/// let from = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
/// assert_eq!(days_in_window(from, to).len(), 3);
/// ```
pub fn days_in_window(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days().take_while(|day| *day <= to).collect()
}

/// Number of calendar days in `[from, to]`, inclusive (0 when `from > to`)
pub fn inclusive_day_count(from: NaiveDate, to: NaiveDate) -> i64 {
    if from > to {
        0
    } else {
        (to - from).num_days() + 1
    }
}

/// Window ending today and starting `lookback_days` earlier
pub fn default_window(today: NaiveDate, lookback_days: u32) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(lookback_days as i64), today)
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Milliseconds since the Unix epoch, used as a cache-busting query value
pub fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse the timestamp formats the payment API emits in `date_time` fields
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM:SS[.fff]`
/// and bare dates (midnight). Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    parse_date(value)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
