//! Per-bank, per-day charge summaries returned by `/charge/general`

use super::flexible;
use super::unescape_slashes;
use crate::utils::math::safe_percentage;
use serde::{Deserialize, Serialize};

/// One bank's aggregated numbers for a single calendar day
///
/// The three status buckets (active, expired, paid) are mutually exclusive.
/// Percentages are shares of `total_amount` and are all zero when the total
/// amount is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_num: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub bank_image_url: String,
    /// Charge date (`YYYY-MM-DD`)
    #[serde(rename = "f110_date", default, deserialize_with = "flexible::string")]
    pub date: String,

    #[serde(default, deserialize_with = "flexible::count")]
    pub active_count: u64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub active_amount: f64,
    #[serde(default, deserialize_with = "flexible::count")]
    pub expired_count: u64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub expired_amount: f64,
    #[serde(default, deserialize_with = "flexible::count")]
    pub paid_count: u64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub paid_amount: f64,

    #[serde(default, deserialize_with = "flexible::count")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "flexible::amount")]
    pub active_percent: f64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub expired_percent: f64,
    #[serde(default, deserialize_with = "flexible::amount")]
    pub paid_percent: f64,
}

impl DailyRecord {
    /// Fix escaped slashes in the image URL and recompute percentages from
    /// the amounts, whatever the upstream sent
    pub fn normalize(&mut self) {
        self.bank_image_url = unescape_slashes(&self.bank_image_url);
        self.recompute_percentages();
    }

    /// Recompute the three status shares from the current amounts
    pub fn recompute_percentages(&mut self) {
        self.active_percent = safe_percentage(self.active_amount, self.total_amount);
        self.expired_percent = safe_percentage(self.expired_amount, self.total_amount);
        self.paid_percent = safe_percentage(self.paid_amount, self.total_amount);
    }

    /// Whether the record carries any transaction at all
    pub fn has_activity(&self) -> bool {
        self.total_count > 0 || self.total_amount > 0.0
    }

    pub fn percent_sum(&self) -> f64 {
        self.active_percent + self.expired_percent + self.paid_percent
    }

    /// Add another record's counts and amounts into this one
    ///
    /// Percentages are recomputed from the summed amounts and the most recent
    /// date of the two is kept. Dates are `YYYY-MM-DD`, so string order is
    /// calendar order.
    pub fn absorb(&mut self, other: &DailyRecord) {
        self.active_count += other.active_count;
        self.active_amount += other.active_amount;
        self.expired_count += other.expired_count;
        self.expired_amount += other.expired_amount;
        self.paid_count += other.paid_count;
        self.paid_amount += other.paid_amount;
        self.total_count += other.total_count;
        self.total_amount += other.total_amount;

        self.recompute_percentages();

        if other.date > self.date {
            self.date = other.date.clone();
        }
        if self.bank_image_url.is_empty() {
            self.bank_image_url = other.bank_image_url.clone();
        }
    }
}
