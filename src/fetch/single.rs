//! Single-charge lookups: detail and activity history
//!
//! One request each, no stagger, no aggregation. Body problems collapse to
//! "not found" (detail) or an empty history instead of an error.

use super::fetcher::PixFetcher;
use crate::api::{classify_body, json_kind, preview, BodyShape, HttpReply};
use crate::errors::{FetchError, FetchResult};
use crate::types::history::sort_newest_first;
use crate::types::{HistoryEntry, PixDetails};
use serde_json::Value;
use tracing::{debug, error, info, warn};

impl PixFetcher {
    /// Fetch one charge by PIX id
    ///
    /// The sentinel, a non-JSON or unparseable body and an empty array all
    /// give [`FetchError::NotFound`]. A one-element array is unwrapped.
    pub async fn fetch_details(&self, pix_id: &str) -> FetchResult<PixDetails> {
        let pix_id = require_pix_id(pix_id)?;
        let token = self.require_token().await?;

        info!("Fetching details for PIX {}", pix_id);
        let reply = self
            .client
            .get(&["charge", "details"], &[("pix_id", pix_id.to_string())], &token)
            .await?;
        ensure_success(&reply)?;

        let not_found = || FetchError::NotFound {
            pix_id: pix_id.to_string(),
        };

        let value = match classify_body(&reply.body) {
            BodyShape::NoData => {
                debug!("PIX {}: no data", pix_id);
                return Err(not_found());
            }
            BodyShape::NotJson => {
                error!("PIX {}: response is not JSON: {}", pix_id, preview(&reply.body));
                return Err(not_found());
            }
            BodyShape::Malformed(reason) => {
                error!(
                    "PIX {}: failed to parse JSON ({}): {}",
                    pix_id,
                    reason,
                    preview(&reply.body)
                );
                return Err(not_found());
            }
            BodyShape::Array(items) => match items.into_iter().next() {
                Some(first) => first,
                None => {
                    debug!("PIX {}: empty array", pix_id);
                    return Err(not_found());
                }
            },
            BodyShape::Other(value) => value,
        };

        let kind = json_kind(&value);
        let mut details: PixDetails = serde_json::from_value(value).map_err(|e| {
            error!("PIX {}: unexpected detail shape ({}): {}", pix_id, kind, e);
            not_found()
        })?;
        details.normalize();
        Ok(details)
    }

    /// Fetch the activity log of one charge, newest first
    ///
    /// The sentinel and any unusable body give an empty history.
    pub async fn fetch_history(&self, pix_id: &str) -> FetchResult<Vec<HistoryEntry>> {
        let pix_id = require_pix_id(pix_id)?;
        let token = self.require_token().await?;

        info!("Fetching history for PIX {}", pix_id);
        let reply = self.client.get(&["history", pix_id], &[], &token).await?;
        ensure_success(&reply)?;

        let items = match classify_body(&reply.body) {
            BodyShape::NoData => {
                debug!("PIX {}: no history", pix_id);
                return Ok(Vec::new());
            }
            BodyShape::NotJson => {
                error!(
                    "PIX {}: history response is not JSON: {}",
                    pix_id,
                    preview(&reply.body)
                );
                return Ok(Vec::new());
            }
            BodyShape::Malformed(reason) => {
                error!(
                    "PIX {}: failed to parse history JSON ({}): {}",
                    pix_id,
                    reason,
                    preview(&reply.body)
                );
                return Ok(Vec::new());
            }
            BodyShape::Other(value) => {
                warn!(
                    "PIX {}: expected a history array, got {}",
                    pix_id,
                    json_kind(&value)
                );
                return Ok(Vec::new());
            }
            BodyShape::Array(items) => items,
        };

        let mut entries: Vec<HistoryEntry> = match serde_json::from_value(Value::Array(items)) {
            Ok(entries) => entries,
            Err(e) => {
                error!("PIX {}: unexpected history entry shape: {}", pix_id, e);
                return Ok(Vec::new());
            }
        };
        sort_newest_first(&mut entries);
        debug!("PIX {}: {} history entries", pix_id, entries.len());
        Ok(entries)
    }
}

fn require_pix_id(pix_id: &str) -> FetchResult<&str> {
    let pix_id = pix_id.trim();
    if pix_id.is_empty() {
        return Err(FetchError::Validation("PIX id is required".to_string()));
    }
    Ok(pix_id)
}

fn ensure_success(reply: &HttpReply) -> FetchResult<()> {
    if reply.is_success() {
        return Ok(());
    }
    if reply.is_auth_failure() {
        warn!("Token rejected by {} (HTTP {})", reply.url, reply.status);
    } else {
        warn!("Request to {} failed with HTTP {}", reply.url, reply.status);
    }
    Err(FetchError::Status {
        url: reply.url.clone(),
        status: reply.status,
    })
}
