//! Fetch routines against the payment API
//!
//! - [`range`] - the per-day fan-out shared by every range view
//! - [`views`] - the summary and per-bank transaction views built on it
//! - [`single`] - single-charge detail and history lookups
//! - [`generation`] - guard that discards results of superseded fetches

pub mod fetcher;
pub mod generation;
pub mod range;
pub mod single;
pub mod views;

pub use fetcher::PixFetcher;
pub use generation::{FetchGeneration, GenerationTicket};
pub use range::{
    stagger_delay, DayOutcome, DayRecord, DayReport, Endpoint, RangeFetch, RangeFetchOptions,
    ReduceMode,
};
pub use views::SummaryReport;
