//! Range views: the charge summary and the per-bank transaction drill-down

use super::fetcher::PixFetcher;
use super::range::{DayReport, Endpoint, RangeFetch, RangeFetchOptions, ReduceMode};
use crate::analysis::statistics::{PerformanceStats, SummaryStatistics};
use crate::errors::{FetchError, FetchResult};
use crate::types::{DailyRecord, DateWindow, PixTransaction};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

/// Everything the summary view renders for one window
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub window: DateWindow,
    pub bank_filter: Option<String>,
    pub reduce_mode: ReduceMode,
    /// Daily rows (concat) or one row per bank (sum by bank)
    pub records: Vec<DailyRecord>,
    pub days_with_data: Vec<NaiveDate>,
    pub statistics: SummaryStatistics,
    pub performance: PerformanceStats,
    pub days: Vec<DayReport>,
}

impl SummaryReport {
    fn from_range(
        range: RangeFetch<DailyRecord>,
        bank_filter: Option<&str>,
        reduce_mode: ReduceMode,
    ) -> Self {
        let statistics = SummaryStatistics::from_records(&range.records);
        Self {
            window: range.window,
            bank_filter: bank_filter.map(|b| b.trim().to_string()),
            reduce_mode,
            records: range.records,
            days_with_data: range.days_with_data,
            statistics,
            performance: range.performance,
            days: range.days,
        }
    }
}

impl PixFetcher {
    /// Daily charge summary for a window, optionally restricted to one bank
    pub async fn fetch_summary(
        &self,
        window: &DateWindow,
        bank_filter: Option<&str>,
        options: &RangeFetchOptions,
    ) -> FetchResult<SummaryReport> {
        let range = self
            .fetch_range::<DailyRecord>(window, Endpoint::ChargeGeneral, bank_filter, options)
            .await?;
        Ok(SummaryReport::from_range(range, bank_filter, options.reduce_mode))
    }

    /// Every charge of one bank across a window
    pub async fn fetch_bank_transactions(
        &self,
        window: &DateWindow,
        bank_num: &str,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<PixTransaction>> {
        let bank_num = require_bank(bank_num)?;
        self.fetch_range(window, Endpoint::ChargeDetails, Some(bank_num), options)
            .await
    }

    /// Charges of one bank, requesting only `days`
    ///
    /// Pass the `days_with_data` of an earlier summary fetch for the same
    /// bank to skip days known to be empty.
    pub async fn fetch_bank_transactions_on_days(
        &self,
        window: &DateWindow,
        days: &[NaiveDate],
        bank_num: &str,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<PixTransaction>> {
        let bank_num = require_bank(bank_num)?;
        self.fetch_range_days(window, days, Endpoint::ChargeDetails, Some(bank_num), options)
            .await
    }

    /// Charges of one bank on the days a summary pass finds data on
    ///
    /// Both the bank and the transaction day limit are checked before the
    /// summary pass, so an over-long window sends no request at all.
    pub async fn fetch_bank_transactions_with_data(
        &self,
        window: &DateWindow,
        bank_num: &str,
        summary_options: &RangeFetchOptions,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<PixTransaction>> {
        let bank_num = require_bank(bank_num)?;
        window.ensure_within(options.day_limit)?;

        let summary = self
            .fetch_summary(window, Some(bank_num), summary_options)
            .await?;
        info!(
            "Bank {} has data on {} of {} days",
            bank_num,
            summary.days_with_data.len(),
            window.day_count()
        );

        self.fetch_bank_transactions_on_days(window, &summary.days_with_data, bank_num, options)
            .await
    }
}

fn require_bank(bank_num: &str) -> FetchResult<&str> {
    let bank_num = bank_num.trim();
    if bank_num.is_empty() {
        return Err(FetchError::Validation(
            "bank number is required for the transaction view".to_string(),
        ));
    }
    Ok(bank_num)
}
