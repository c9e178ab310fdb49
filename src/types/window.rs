//! Validated calendar-day windows
//!
//! A [`DateWindow`] is created from user input, validated before any network
//! call is issued, and never mutated afterwards; a changed range is a new window.

use crate::config::MAX_WINDOW_DAYS;
use crate::errors::{FetchError, FetchResult};
use crate::utils::time::{days_in_window, default_window, format_date, inclusive_day_count, parse_date};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Inclusive pair of calendar dates with `from <= to` and at most
/// [`MAX_WINDOW_DAYS`] days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting reversed ranges and ranges longer than the
    /// hard ceiling
    pub fn new(from: NaiveDate, to: NaiveDate) -> FetchResult<Self> {
        if from > to {
            return Err(FetchError::Validation(format!(
                "start date {} is after end date {}",
                format_date(from),
                format_date(to)
            )));
        }

        let window = Self { from, to };
        window.ensure_within(MAX_WINDOW_DAYS)?;
        Ok(window)
    }

    /// Build a window from optional `YYYY-MM-DD` strings
    ///
    /// Missing bounds fall back to the last `lookback_days` days ending `today`.
    pub fn from_input(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        lookback_days: u32,
    ) -> FetchResult<Self> {
        let (default_from, default_to) = default_window(today, lookback_days);

        let from = match from {
            Some(raw) => parse_input_date(raw)?,
            None => default_from,
        };
        let to = match to {
            Some(raw) => parse_input_date(raw)?,
            None => default_to,
        };

        Self::new(from, to)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar days covered, inclusive
    pub fn day_count(&self) -> u32 {
        inclusive_day_count(self.from, self.to) as u32
    }

    /// Every calendar day in the window, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        days_in_window(self.from, self.to)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Fail with a validation error when the window is longer than `limit` days
    pub fn ensure_within(&self, limit: u32) -> FetchResult<()> {
        let days = self.day_count();
        if days > limit {
            return Err(FetchError::Validation(format!(
                "window too long: {} days (maximum allowed: {} days)",
                days, limit
            )));
        }
        Ok(())
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", format_date(self.from), format_date(self.to))
    }
}

fn parse_input_date(raw: &str) -> FetchResult<NaiveDate> {
    parse_date(raw).map_err(|e| {
        FetchError::Validation(format!("invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
    })
}
