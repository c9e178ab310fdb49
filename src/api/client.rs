use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult, FetchError, FetchResult};
use crate::utils::time::unix_millis;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

const ACCEPT_VALUE: &str = "application/json, text/javascript, */*; q=0.01";
const ACCEPT_LANGUAGE_VALUE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Raw HTTP reply: status plus the body read as text
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// Request URL without the cache-busting parameter
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 401/403 - the token was rejected
    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Payment API client
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PixApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PixApiClient {
    /// Create a client with the configured base URL, origin and timeout
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            AppError::Config(format!("Invalid api.base_url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "api.base_url '{}' cannot be used as a base URL",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        if !config.origin.trim().is_empty() {
            let origin = HeaderValue::from_str(config.origin.trim()).map_err(|e| {
                AppError::Config(format!("Invalid api.origin '{}': {}", config.origin, e))
            })?;
            headers.insert(ORIGIN, origin);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build an endpoint URL by appending path segments to the base URL
    ///
    /// Segments are percent-encoded, so identifiers can be passed verbatim.
    pub fn endpoint(&self, segments: &[&str]) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Request {
                url: self.base_url.to_string(),
                message: "base URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue an authenticated GET and read the body as text
    ///
    /// Any HTTP status is returned as an [`HttpReply`]; only network-level
    /// failures (connect, timeout, body read) are errors here.
    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        token: &str,
    ) -> FetchResult<HttpReply> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        let label = url.to_string();

        url.query_pairs_mut()
            .append_pair("_", &unix_millis().to_string());

        debug!("GET {}", label);

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: label.clone(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FetchError::Request {
            url: label.clone(),
            message: format!("failed to read body: {}", e),
        })?;

        Ok(HttpReply {
            url: label,
            status,
            body,
        })
    }
}
