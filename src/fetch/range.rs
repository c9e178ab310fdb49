//! Per-day fan-out over a date window
//!
//! One routine serves every range view. A window is split into calendar days,
//! each day is requested independently after a stagger delay, and the results
//! are joined once every day has settled. A day that fails for any reason
//! (token, network, status, body) contributes nothing and never aborts its
//! siblings; only validation, a missing token and a superseded generation
//! fail the whole fetch.

use super::fetcher::PixFetcher;
use crate::analysis::grouping::group_by_bank;
use crate::analysis::statistics::PerformanceStats;
use crate::api::{classify_body, json_kind, preview, BodyShape};
use crate::config::FetchConfig;
use crate::errors::{FetchError, FetchResult};
use crate::types::{DailyRecord, DateWindow, PixTransaction};
use crate::utils::time::format_date;
use chrono::NaiveDate;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Row type produced by a per-day endpoint
pub trait DayRecord: DeserializeOwned + Send + Sized {
    /// Clean up wire quirks after parsing
    fn normalize(&mut self);

    /// Rows without activity are dropped in [`ReduceMode::Concat`]
    fn has_activity(&self) -> bool {
        true
    }

    /// Fold used by [`ReduceMode::SumByBank`]
    fn sum_by_bank(records: Vec<Self>) -> Vec<Self> {
        records
    }
}

impl DayRecord for DailyRecord {
    fn normalize(&mut self) {
        DailyRecord::normalize(self)
    }

    fn has_activity(&self) -> bool {
        DailyRecord::has_activity(self)
    }

    fn sum_by_bank(records: Vec<Self>) -> Vec<Self> {
        group_by_bank(&records)
    }
}

impl DayRecord for PixTransaction {
    fn normalize(&mut self) {
        PixTransaction::normalize(self)
    }
}

/// Per-day endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/charge/general`: one [`DailyRecord`] per bank and day
    ChargeGeneral,
    /// `/charge/details`: one [`PixTransaction`] per charge
    ChargeDetails,
}

impl Endpoint {
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Endpoint::ChargeGeneral => &["charge", "general"],
            Endpoint::ChargeDetails => &["charge", "details"],
        }
    }
}

/// How the per-day rows are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceMode {
    /// Keep every active row as returned, one per bank and day
    #[default]
    Concat,
    /// Fold all rows into one per bank
    SumByBank,
}

/// Parameters of one range fetch
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFetchOptions {
    /// Longest accepted window, in inclusive calendar days
    pub day_limit: u32,
    /// Day `i` waits `stagger * i` before its request
    pub stagger: Duration,
    pub reduce_mode: ReduceMode,
}

impl RangeFetchOptions {
    /// Summary view: 30 days, 50 ms stagger, rows concatenated
    pub fn summary(config: &FetchConfig) -> Self {
        Self {
            day_limit: config.summary_day_limit,
            stagger: Duration::from_millis(config.summary_stagger_ms),
            reduce_mode: ReduceMode::Concat,
        }
    }

    /// Performance view: the summary view summed by bank
    pub fn performance(config: &FetchConfig) -> Self {
        Self {
            reduce_mode: ReduceMode::SumByBank,
            ..Self::summary(config)
        }
    }

    /// Per-bank transaction drill-down: 15 days, 100 ms stagger
    pub fn transactions(config: &FetchConfig) -> Self {
        Self {
            day_limit: config.transactions_day_limit,
            stagger: Duration::from_millis(config.transactions_stagger_ms),
            reduce_mode: ReduceMode::Concat,
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

impl Default for RangeFetchOptions {
    fn default() -> Self {
        Self::summary(&FetchConfig::default())
    }
}

/// What happened to a single day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum DayOutcome {
    /// Parsed array with this many rows (possibly zero)
    Records(usize),
    /// The API's "no data" sentinel
    NoData,
    /// Degraded to an empty day
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day: NaiveDate,
    pub outcome: DayOutcome,
    /// Wall time of the request itself, stagger excluded
    pub request_time_ms: f64,
}

/// Result of a range fetch
#[derive(Debug, Clone, Serialize)]
pub struct RangeFetch<R> {
    pub window: DateWindow,
    /// Rows of every day, in day order, reduced per the requested mode
    pub records: Vec<R>,
    /// Days whose response held at least one row, ascending
    pub days_with_data: Vec<NaiveDate>,
    /// One entry per requested day, in request order
    pub days: Vec<DayReport>,
    pub performance: PerformanceStats,
}

impl<R> RangeFetch<R> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn failed_days(&self) -> impl Iterator<Item = &DayReport> {
        self.days
            .iter()
            .filter(|d| matches!(d.outcome, DayOutcome::Failed(_)))
    }
}

/// Delay before the request of the day at `index`
pub fn stagger_delay(stagger: Duration, index: usize) -> Duration {
    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

impl PixFetcher {
    /// Fetch every day of `window` from `endpoint` and combine the rows
    ///
    /// Rejects with [`FetchError::Validation`] before any request when the
    /// window is longer than `options.day_limit` or the bank filter is blank,
    /// and with [`FetchError::Unauthenticated`] when no token is available.
    pub async fn fetch_range<R: DayRecord>(
        &self,
        window: &DateWindow,
        endpoint: Endpoint,
        bank_filter: Option<&str>,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<R>> {
        window.ensure_within(options.day_limit)?;
        self.run_range(*window, window.days(), endpoint, bank_filter, options)
            .await
    }

    /// Fetch only the given days of `window`
    ///
    /// Used to re-fetch the days a previous fetch found data on. Days are
    /// staggered by their position in `days`; every day must lie inside
    /// `window`.
    pub async fn fetch_range_days<R: DayRecord>(
        &self,
        window: &DateWindow,
        days: &[NaiveDate],
        endpoint: Endpoint,
        bank_filter: Option<&str>,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<R>> {
        window.ensure_within(options.day_limit)?;
        if let Some(outside) = days.iter().find(|day| !window.contains(**day)) {
            return Err(FetchError::Validation(format!(
                "day {} is outside the window {}",
                format_date(*outside),
                window
            )));
        }
        self.run_range(*window, days.to_vec(), endpoint, bank_filter, options)
            .await
    }

    async fn run_range<R: DayRecord>(
        &self,
        window: DateWindow,
        days: Vec<NaiveDate>,
        endpoint: Endpoint,
        bank_filter: Option<&str>,
        options: &RangeFetchOptions,
    ) -> FetchResult<RangeFetch<R>> {
        let bank_filter = match bank_filter.map(str::trim) {
            Some("") => {
                return Err(FetchError::Validation(
                    "bank filter must not be empty".to_string(),
                ))
            }
            other => other,
        };

        let ticket = self.begin_generation();

        // Each day fetches its own token; this only short-circuits the
        // signed-out case before anything is sent.
        self.require_token().await?;

        info!(
            "Fetching {} day(s) of {:?} for {} (bank: {})",
            days.len(),
            endpoint,
            window,
            bank_filter.unwrap_or("all")
        );

        let started = Instant::now();
        let fetches = days.iter().enumerate().map(|(index, day)| {
            self.fetch_day::<R>(
                *day,
                stagger_delay(options.stagger, index),
                endpoint,
                bank_filter,
            )
        });
        let settled = join_all(fetches).await;
        let parallel_time = started.elapsed();

        if let Some(ticket) = &ticket {
            if let Err(e) = ticket.check() {
                debug!("Discarding range result for {}: {}", window, e);
                return Err(e);
            }
        }

        let mut records = Vec::new();
        let mut days_with_data = Vec::new();
        let mut reports = Vec::with_capacity(settled.len());
        let mut request_times = Vec::with_capacity(settled.len());

        for (report, rows, elapsed) in settled {
            if !rows.is_empty() {
                days_with_data.push(report.day);
            }
            records.extend(rows);
            request_times.push(elapsed);
            reports.push(report);
        }
        days_with_data.sort();

        let raw_count = records.len();
        let records = match options.reduce_mode {
            ReduceMode::Concat => {
                records.retain(|record| record.has_activity());
                records
            }
            ReduceMode::SumByBank => R::sum_by_bank(records),
        };

        info!(
            "{}/{} days with data, {} records ({} raw) for {}",
            days_with_data.len(),
            reports.len(),
            records.len(),
            raw_count,
            window
        );

        Ok(RangeFetch {
            window,
            records,
            days_with_data,
            days: reports,
            performance: PerformanceStats::from_timings(&request_times, parallel_time),
        })
    }

    async fn fetch_day<R: DayRecord>(
        &self,
        day: NaiveDate,
        delay: Duration,
        endpoint: Endpoint,
        bank_filter: Option<&str>,
    ) -> (DayReport, Vec<R>, Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let started = Instant::now();
        let (outcome, rows) = self.request_day::<R>(day, endpoint, bank_filter).await;
        let elapsed = started.elapsed();

        let report = DayReport {
            day,
            outcome,
            request_time_ms: elapsed.as_secs_f64() * 1000.0,
        };
        (report, rows, elapsed)
    }

    async fn request_day<R: DayRecord>(
        &self,
        day: NaiveDate,
        endpoint: Endpoint,
        bank_filter: Option<&str>,
    ) -> (DayOutcome, Vec<R>) {
        let date = format_date(day);

        let token = match self.tokens.bearer_token().await {
            Some(token) => token,
            None => {
                warn!("{}: no bearer token available, skipping day", date);
                return failed("no bearer token available");
            }
        };

        let mut query = vec![("date_from", date.clone()), ("date_to", date.clone())];
        if let Some(bank) = bank_filter {
            query.push(("bank_num", bank.to_string()));
        }

        let reply = match self.client.get(endpoint.segments(), &query, &token).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("{}: {}", date, e);
                return failed(e.to_string());
            }
        };

        if reply.is_auth_failure() {
            warn!("{}: token rejected (HTTP {})", date, reply.status);
            return failed(format!("token rejected (HTTP {})", reply.status));
        }
        if !reply.is_success() {
            warn!("{}: request failed with HTTP {}", date, reply.status);
            return failed(format!("HTTP {}", reply.status));
        }

        let items = match classify_body(&reply.body) {
            BodyShape::NoData => {
                debug!("{}: no data", date);
                return (DayOutcome::NoData, Vec::new());
            }
            BodyShape::NotJson => {
                error!("{}: response is not JSON: {}", date, preview(&reply.body));
                return failed("response is not JSON");
            }
            BodyShape::Malformed(reason) => {
                error!(
                    "{}: failed to parse JSON ({}): {}",
                    date,
                    reason,
                    preview(&reply.body)
                );
                return failed(format!("malformed JSON: {}", reason));
            }
            BodyShape::Other(value) => {
                warn!("{}: expected an array, got {}", date, json_kind(&value));
                return failed(format!("expected an array, got {}", json_kind(&value)));
            }
            BodyShape::Array(items) => items,
        };

        match serde_json::from_value::<Vec<R>>(Value::Array(items)) {
            Ok(mut rows) => {
                rows.iter_mut().for_each(|row| row.normalize());
                debug!("{}: {} records", date, rows.len());
                (DayOutcome::Records(rows.len()), rows)
            }
            Err(e) => {
                error!("{}: unexpected record shape: {}", date, e);
                failed(format!("unexpected record shape: {}", e))
            }
        }
    }
}

fn failed<R>(reason: impl Into<String>) -> (DayOutcome, Vec<R>) {
    (DayOutcome::Failed(reason.into()), Vec::new())
}
