//! Charge history-log entries returned by `/history/<pix_id>`

use super::flexible;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "flexible::string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub row_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub pix_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub wk_instance_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub status: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub title: String,
    #[serde(rename = "desc", default, deserialize_with = "flexible::string")]
    pub description: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub method: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub icon_id: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub username: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub date: String,
    #[serde(default, deserialize_with = "flexible::string")]
    pub date_time: String,
}

impl HistoryEntry {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date_time)
    }
}

/// Sort entries newest first
///
/// Entries with an unparseable `date_time` go after every dated entry. The
/// sort is stable, so ties keep their API order.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_by_cached_key(|entry| std::cmp::Reverse(entry.timestamp()));
}
