//! Per-bank transaction report formatters

use super::utils::{export_json, or_dash, truncate, RULE};
use super::OutputFormat;
use crate::analysis::filters::available_statuses;
use crate::errors::AppResult;
use crate::fetch::RangeFetch;
use crate::types::PixTransaction;
use crate::utils::currency::{format_brl, format_count};
use serde::Serialize;

#[derive(Serialize)]
struct TransactionListing<'a> {
    window: String,
    total: usize,
    shown: usize,
    statuses: Vec<String>,
    days_with_data: &'a [chrono::NaiveDate],
    transactions: &'a [&'a PixTransaction],
}

/// Format a bank's transactions; `shown` is the filtered subset of
/// `range.records`
pub fn format_transactions(
    range: &RangeFetch<PixTransaction>,
    shown: &[&PixTransaction],
    format: &OutputFormat,
) -> AppResult<String> {
    let statuses = available_statuses(&range.records);

    match format {
        OutputFormat::Json => export_json(&TransactionListing {
            window: range.window.to_string(),
            total: range.records.len(),
            shown: shown.len(),
            statuses,
            days_with_data: &range.days_with_data,
            transactions: shown,
        }),
        OutputFormat::Console => {
            let mut output = format!("\n💳 PIX TRANSACTIONS\n{}\n", RULE);
            output.push_str(&format!("Period:      {}\n", range.window));
            output.push_str(&format!(
                "Showing:     {} of {}\n",
                format_count(shown.len() as u64),
                format_count(range.records.len() as u64)
            ));
            if !statuses.is_empty() {
                output.push_str(&format!("Statuses:    {}\n", statuses.join(", ")));
            }
            output.push('\n');

            if shown.is_empty() {
                output.push_str("No transactions found.\n");
                return Ok(output);
            }

            output.push_str(&format!(
                "{:<24} {:<10} {:<28} {:<18} {:>14} {:<12}\n",
                "PIX id", "Date", "Customer", "Document", "Value", "Status"
            ));
            let mut total = 0.0;
            for tx in shown {
                let document = if tx.customer_cpf.is_empty() {
                    &tx.customer_cnpj
                } else {
                    &tx.customer_cpf
                };
                output.push_str(&format!(
                    "{:<24} {:<10} {:<28} {:<18} {:>14} {:<12}\n",
                    truncate(or_dash(&tx.pix_id), 24),
                    or_dash(&tx.date),
                    truncate(or_dash(&tx.customer_name), 28),
                    or_dash(document),
                    format_brl(tx.value),
                    or_dash(&tx.status),
                ));
                total += tx.value;
            }
            output.push_str(&format!("\nTotal value: {}\n", format_brl(total)));
            Ok(output)
        }
    }
}
