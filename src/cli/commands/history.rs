use super::{build_fetcher, parse_format};
use crate::analysis::ReportFormatter;
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use clap::Args;

/// Activity history of a single charge
#[derive(Args)]
pub struct HistoryCommand {
    /// PIX id of the charge
    pub pix_id: String,

    /// Output format (console, json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl HistoryCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let (_, fetcher) = build_fetcher(global)?;
        let entries = fetcher.fetch_history(&self.pix_id).await?;
        print!(
            "{}",
            ReportFormatter::format_history(
                self.pix_id.trim(),
                &entries,
                &parse_format(&self.format)
            )?
        );
        Ok(())
    }
}
