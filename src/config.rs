use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Hard ceiling for any per-day fan-out, whatever the configuration says
pub const MAX_WINDOW_DAYS: u32 = 30;

/// Environment variable holding the bearer token for the payment API
pub const TOKEN_ENV_VAR: &str = "PIX_API_TOKEN";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pix-monitor";

/// Application configuration loaded from pix-monitor.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

/// Remote payment API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub origin: String,
    pub timeout_seconds: u64,
    pub bearer_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.sandbox.pixntt.cloud".to_string(),
            origin: "https://webapp.sandbox.pixntt.cloud".to_string(),
            timeout_seconds: 30,
            bearer_token: None,
        }
    }
}

/// Day-range fan-out settings for the summary and transaction views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub summary_day_limit: u32,
    pub summary_stagger_ms: u64,
    pub transactions_day_limit: u32,
    pub transactions_stagger_ms: u64,
    pub default_lookback_days: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            summary_day_limit: 30,
            summary_stagger_ms: 50,
            transactions_day_limit: 15,
            transactions_stagger_ms: 100,
            default_lookback_days: 7,
        }
    }
}

impl AppConfig {
    /// Load configuration from pix-monitor.toml in the working directory and
    /// environment variables. Environment variables take precedence over file
    /// configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading an explicit file when `path` is given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let api = ApiConfig::default();
        let fetch = FetchConfig::default();

        let mut builder = Config::builder()
            .set_default("api.base_url", api.base_url)?
            .set_default("api.origin", api.origin)?
            .set_default("api.timeout_seconds", api.timeout_seconds)?
            .set_default("fetch.summary_day_limit", fetch.summary_day_limit as i64)?
            .set_default("fetch.summary_stagger_ms", fetch.summary_stagger_ms)?
            .set_default(
                "fetch.transactions_day_limit",
                fetch.transactions_day_limit as i64,
            )?
            .set_default(
                "fetch.transactions_stagger_ms",
                fetch.transactions_stagger_ms,
            )?
            .set_default(
                "fetch.default_lookback_days",
                fetch.default_lookback_days as i64,
            )?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        // PIX__API__BASE_URL, PIX__FETCH__SUMMARY_STAGGER_MS, ...
        let config = builder
            .add_source(config::Environment::with_prefix("PIX").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                app_config.api.bearer_token = Some(token);
            }
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// Get default config values, falling back to built-in defaults when
    /// nothing can be loaded
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(_) => Self {
                api: ApiConfig::default(),
                fetch: FetchConfig::default(),
            },
        }
    }

    /// Reject configurations the fetch routines cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Message("api.base_url must not be empty".to_string()));
        }

        for (key, limit) in [
            ("fetch.summary_day_limit", self.fetch.summary_day_limit),
            ("fetch.transactions_day_limit", self.fetch.transactions_day_limit),
        ] {
            if limit == 0 || limit > MAX_WINDOW_DAYS {
                return Err(ConfigError::Message(format!(
                    "{} must be between 1 and {} (got {})",
                    key, MAX_WINDOW_DAYS, limit
                )));
            }
        }

        Ok(())
    }
}
