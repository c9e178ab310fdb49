//! PIX Charge Monitor - Type System
//!
//! - `window`: Validated calendar-day windows (DateWindow)
//! - `daily`: Per-bank, per-day charge summaries (DailyRecord)
//! - `transaction`: Per-transaction rows from the bank drill-down
//! - `details`: Single charge detail
//! - `history`: Charge history-log entries
//! - `flexible`: Lenient serde helpers for loosely typed API fields

pub mod daily;
pub mod details;
pub mod flexible;
pub mod history;
pub mod transaction;
pub mod window;

pub use daily::DailyRecord;
pub use details::PixDetails;
pub use history::HistoryEntry;
pub use transaction::{Cob, Debtor, PixTransaction, QrCode};
pub use window::DateWindow;

/// Undo JSON-style escaped slashes (`\/`) that the payment API leaves in URL fields
///
/// # Examples
/// ```
/// use pix_monitor::types::unescape_slashes;
///
/// assert_eq!(
///     unescape_slashes(r"https:\/\/cdn.example\/bank\/001.png"),
///     "https://cdn.example/bank/001.png"
/// );
/// ```
pub fn unescape_slashes(value: &str) -> String {
    value.replace("\\/", "/")
}
