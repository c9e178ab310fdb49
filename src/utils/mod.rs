//! Shared helpers for percentages, calendar days and BRL formatting

pub mod currency;
pub mod math;
pub mod time;
