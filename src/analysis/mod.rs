//! Charge analysis module
//!
//! Pure, I/O-free processing of what the fetch routines return:
//!
//! - **Grouping** - Fold per-day records into one summary per bank
//! - **Statistics** - Scalar rollups (totals, paid/pending counts, averages)
//!   and fan-out performance figures
//! - **Filters** - Search and status filtering of transaction rows
//! - **Report Generation** - Formatted output for console and JSON export
//!
//! ## Usage
//!
//! ```rust
//! use pix_monitor::analysis::{group_by_bank, SummaryStatistics};
//! use pix_monitor::types::DailyRecord;
//!
//! let records: Vec<DailyRecord> = Vec::new();
//! let grouped = group_by_bank(&records);
//! let stats = SummaryStatistics::from_records(&grouped);
//! assert_eq!(stats.average_amount, 0.0);
//! ```

pub mod filters;
pub mod grouping;
pub mod reports;
pub mod statistics;

// Re-export main types and interfaces
pub use filters::{available_statuses, TransactionFilter};
pub use grouping::{group_by_bank, GroupedBankSummary};
pub use reports::{OutputFormat, ReportFormatter};
pub use statistics::{PerformanceStats, SummaryStatistics};
