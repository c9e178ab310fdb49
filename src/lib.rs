//! PIX Charge Monitor
//!
//! Range fetch-and-aggregate over the payment API's per-day endpoints, a
//! group-by-bank reducer, and single-charge detail and history lookups.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod types;
pub mod utils;
