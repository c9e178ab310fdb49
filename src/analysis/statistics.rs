//! Summary statistics over charge records and fan-out performance figures

use crate::types::DailyRecord;
use crate::utils::math::safe_average;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scalar rollup over a set of daily or grouped records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_amount: f64,
    pub total_transactions: u64,
    pub paid_transactions: u64,
    /// Charges still active (awaiting payment)
    pub pending_transactions: u64,
    /// `total_amount / total_transactions`, 0 when there are no transactions
    pub average_amount: f64,
}

impl SummaryStatistics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.total_amount += record.total_amount;
            stats.total_transactions += record.total_count;
            stats.paid_transactions += record.paid_count;
            stats.pending_transactions += record.active_count;
        }
        stats.average_amount = safe_average(stats.total_amount, stats.total_transactions);
        stats
    }
}

/// Timing figures for one day-range fan-out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub request_count: usize,
    /// Sum of every per-day request's own wall time
    pub total_request_time_ms: f64,
    pub avg_time_per_request_ms: f64,
    /// Wall time of the whole routine, stagger delays included
    pub parallel_time_ms: f64,
    /// `total_request_time / parallel_time * 100`; above 100 means requests overlapped
    pub efficiency_percent: f64,
}

impl PerformanceStats {
    pub fn from_timings(request_times: &[Duration], parallel_time: Duration) -> Self {
        let total_request_time_ms: f64 = request_times.iter().map(duration_ms).sum();
        let parallel_time_ms = duration_ms(&parallel_time);
        let request_count = request_times.len();

        Self {
            request_count,
            total_request_time_ms,
            avg_time_per_request_ms: if request_count == 0 {
                0.0
            } else {
                total_request_time_ms / request_count as f64
            },
            parallel_time_ms,
            efficiency_percent: if parallel_time_ms > 0.0 {
                total_request_time_ms / parallel_time_ms * 100.0
            } else {
                0.0
            },
        }
    }
}

fn duration_ms(duration: &Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
