use super::{build_fetcher, parse_format};
use crate::analysis::ReportFormatter;
use crate::cli::GlobalArgs;
use crate::errors::AppResult;
use clap::Args;

/// Details of a single charge
#[derive(Args)]
pub struct DetailCommand {
    /// PIX id of the charge
    pub pix_id: String,

    /// Output format (console, json)
    #[arg(long, default_value = "console")]
    pub format: String,
}

impl DetailCommand {
    pub async fn run(&self, global: &GlobalArgs) -> AppResult<()> {
        let (_, fetcher) = build_fetcher(global)?;
        let details = fetcher.fetch_details(&self.pix_id).await?;
        print!(
            "{}",
            ReportFormatter::format_details(&details, &parse_format(&self.format))?
        );
        Ok(())
    }
}
