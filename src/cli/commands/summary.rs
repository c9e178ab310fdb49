use super::{build_fetcher, parse_format, resolve_window};
use crate::analysis::ReportFormatter;
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::fetch::RangeFetchOptions;
use clap::Args;
use tracing::info;

/// Daily charge summary per bank over a date window
#[derive(Args)]
pub struct SummaryCommand {
    /// First day (YYYY-MM-DD, default: today minus the configured lookback)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub to: Option<String>,

    /// Only this bank number
    #[arg(long)]
    pub bank: Option<String>,

    /// Fold the daily rows into one row per bank for display
    #[arg(long)]
    pub group_by_bank: bool,

    /// Sum rows by bank while fetching (performance view)
    #[arg(long, conflicts_with = "group_by_bank")]
    pub sum_by_bank: bool,

    /// Output format (console, json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl SummaryCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let (config, fetcher) = build_fetcher(global)?;
        let window = resolve_window(self.from.as_deref(), self.to.as_deref(), &config)?;

        let options = if self.sum_by_bank {
            RangeFetchOptions::performance(&config.fetch)
        } else {
            RangeFetchOptions::summary(&config.fetch)
        };

        info!("Fetching charge summary for {}", window);
        let report = fetcher
            .fetch_summary(&window, self.bank.as_deref(), &options)
            .await?;

        let format = parse_format(&self.format);
        let output = if self.group_by_bank {
            ReportFormatter::format_grouped_summary(&report, &format)?
        } else {
            ReportFormatter::format_summary(&report, &format)?
        };
        print!("{}", output);
        Ok(())
    }
}
