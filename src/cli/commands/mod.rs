//! Subcommand implementations and the helpers they share

pub mod detail;
pub mod history;
pub mod summary;
pub mod transactions;

use super::GlobalArgs;
use crate::analysis::OutputFormat;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::fetch::PixFetcher;
use crate::types::DateWindow;
use crate::utils::time::today;
use tracing::debug;

/// Load configuration and apply the global CLI overrides
pub fn load_config(global: &GlobalArgs) -> AppResult<AppConfig> {
    let mut config = AppConfig::load_from(global.config.as_deref())?;

    if let Some(base_url) = &global.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(token) = &global.token {
        config.api.bearer_token = Some(token.clone());
    }

    config.validate()?;
    debug!("Using payment API at {}", config.api.base_url);
    Ok(config)
}

/// Configuration plus a fetcher built from it
pub fn build_fetcher(global: &GlobalArgs) -> AppResult<(AppConfig, PixFetcher)> {
    let config = load_config(global)?;
    let fetcher = PixFetcher::from_config(&config)?;
    Ok((config, fetcher))
}

/// Window from `--from`/`--to`, defaulting to the configured lookback
pub fn resolve_window(
    from: Option<&str>,
    to: Option<&str>,
    config: &AppConfig,
) -> AppResult<DateWindow> {
    Ok(DateWindow::from_input(
        from,
        to,
        today(),
        config.fetch.default_lookback_days,
    )?)
}

/// Parse output format string to OutputFormat enum
pub fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}
