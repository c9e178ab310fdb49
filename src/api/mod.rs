//! Remote payment API integration module
//!
//! This module provides the plumbing every fetch routine shares:
//! - **Client** - HTTP GET against the payment API with bearer authentication
//! - **Response** - Classification of raw response bodies (sentinel, non-JSON, array, object)
//! - **Auth** - The injected bearer-token capability
//!
//! The client reads every body as text before any parsing, because the API
//! answers empty queries with a plain-text sentinel instead of `[]`.

pub mod auth;
pub mod client;
pub mod response;

// Re-export main types
pub use auth::{StaticTokenProvider, TokenProvider};
pub use client::{HttpReply, PixApiClient};
pub use response::{classify_body, json_kind, preview, BodyShape, NO_DATA_SENTINEL};
