//! Report formatting and output generation
//!
//! Provides formatting for fetch results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod charge;
pub mod summary;
pub mod transactions;
pub mod utils;

use crate::errors::AppResult;
use crate::fetch::{RangeFetch, SummaryReport};
use crate::types::{HistoryEntry, PixDetails, PixTransaction};

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_summary(r: &SummaryReport, f: &OutputFormat) -> AppResult<String> {
        summary::format_summary(r, f)
    }
    pub fn format_grouped_summary(r: &SummaryReport, f: &OutputFormat) -> AppResult<String> {
        summary::format_grouped_summary(r, f)
    }

    pub fn format_transactions(
        range: &RangeFetch<PixTransaction>,
        shown: &[&PixTransaction],
        f: &OutputFormat,
    ) -> AppResult<String> {
        transactions::format_transactions(range, shown, f)
    }

    pub fn format_details(d: &PixDetails, f: &OutputFormat) -> AppResult<String> {
        charge::format_details(d, f)
    }
    pub fn format_history(pix_id: &str, h: &[HistoryEntry], f: &OutputFormat) -> AppResult<String> {
        charge::format_history(pix_id, h, f)
    }
}
