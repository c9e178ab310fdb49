use super::{build_fetcher, parse_format, resolve_window};
use crate::analysis::{ReportFormatter, TransactionFilter};
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use crate::fetch::{DayOutcome, RangeFetchOptions};
use clap::Args;
use tracing::warn;

/// Charges of one bank over a date window
#[derive(Args)]
pub struct TransactionsCommand {
    /// Bank number
    #[arg(long)]
    pub bank: String,

    /// First day (YYYY-MM-DD, default: today minus the configured lookback)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub to: Option<String>,

    /// Run the summary first and request only the days it found data on
    #[arg(long)]
    pub only_days_with_data: bool,

    /// Search customer name, email, txid, CPF or CNPJ
    #[arg(long)]
    pub search: Option<String>,

    /// Only this status ("all" for every status)
    #[arg(long)]
    pub status: Option<String>,

    /// Output format (console, json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl TransactionsCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let (config, fetcher) = build_fetcher(global)?;
        let window = resolve_window(self.from.as_deref(), self.to.as_deref(), &config)?;
        let options = RangeFetchOptions::transactions(&config.fetch);

        let range = if self.only_days_with_data {
            fetcher
                .fetch_bank_transactions_with_data(
                    &window,
                    &self.bank,
                    &RangeFetchOptions::summary(&config.fetch),
                    &options,
                )
                .await?
        } else {
            fetcher
                .fetch_bank_transactions(&window, &self.bank, &options)
                .await?
        };

        for day in range.failed_days() {
            if let DayOutcome::Failed(reason) = &day.outcome {
                warn!("Transactions for {} are incomplete: {}", day.day, reason);
            }
        }

        let filter = TransactionFilter::new(self.search.clone(), self.status.clone());
        let shown = filter.apply(&range.records);

        let output =
            ReportFormatter::format_transactions(&range, &shown, &parse_format(&self.format))?;
        print!("{}", output);
        Ok(())
    }
}
