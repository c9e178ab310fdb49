//! Bearer-token capability injected into every fetch routine
//!
//! Token issuance and refresh belong to the hosted identity provider; the
//! fetch routines only need "the current bearer token, if any".

use async_trait::async_trait;

/// Source of the current bearer token
///
/// Implementations return `None` when no signed-in session exists. Callers
/// treat the returned value as an immutable snapshot for one request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Option<String>;
}

/// Token provider backed by a fixed value (configuration, environment, CLI flag)
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_option(Some(token.into()))
    }

    /// Blank tokens count as no token
    pub fn from_option(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Provider with no signed-in session
    pub fn unauthenticated() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
