use super::generation::{FetchGeneration, GenerationTicket};
use crate::api::{PixApiClient, StaticTokenProvider, TokenProvider};
use crate::config::AppConfig;
use crate::errors::{AppResult, FetchError, FetchResult};
use std::sync::Arc;

/// Entry point for every fetch against the payment API
///
/// Holds the HTTP client, the injected bearer-token source and an optional
/// generation counter. Range fetches live in [`super::range`] and
/// [`super::views`], single-charge lookups in [`super::single`].
#[derive(Clone)]
pub struct PixFetcher {
    pub(crate) client: PixApiClient,
    pub(crate) tokens: Arc<dyn TokenProvider>,
    generation: Option<FetchGeneration>,
}

impl PixFetcher {
    pub fn new(client: PixApiClient, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            tokens,
            generation: None,
        }
    }

    /// Build a fetcher whose token comes from the configuration
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = PixApiClient::new(&config.api)?;
        let tokens = StaticTokenProvider::from_option(config.api.bearer_token.clone());
        Ok(Self::new(client, Arc::new(tokens)))
    }

    /// Attach a generation counter; range fetches started on it supersede
    /// one another
    pub fn with_generation(mut self, generation: FetchGeneration) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn generation(&self) -> Option<&FetchGeneration> {
        self.generation.as_ref()
    }

    pub(crate) fn begin_generation(&self) -> Option<GenerationTicket> {
        self.generation.as_ref().map(FetchGeneration::begin)
    }

    pub(crate) async fn require_token(&self) -> FetchResult<String> {
        self.tokens
            .bearer_token()
            .await
            .ok_or(FetchError::Unauthenticated)
    }
}

impl std::fmt::Debug for PixFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixFetcher")
            .field("base_url", &self.client.base_url())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
