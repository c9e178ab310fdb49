//! Single-charge detail and history formatters

use super::utils::{export_json, or_dash, RULE};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{HistoryEntry, PixDetails};
use crate::utils::currency::format_brl;
use serde::Serialize;

pub fn format_details(details: &PixDetails, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(details),
        OutputFormat::Console => {
            let mut output = format!("\n🔎 PIX {}\n{}\n", details.pix_id, RULE);

            let rows = [
                ("TXID", details.txid.as_str()),
                ("Status", details.status.as_str()),
                ("QR status", details.status_qrcode.as_str()),
                ("PIX key", details.pix_key.as_str()),
                ("Due date", details.due_date.as_str()),
                ("Created", details.date_time.as_str()),
                ("Payment type", details.payment_type.as_str()),
            ];
            for (label, value) in rows {
                output.push_str(&format!("{:<14} {}\n", label, or_dash(value)));
            }
            output.push_str(&format!("{:<14} {}\n", "Value", format_brl(details.value)));

            output.push_str("\nCustomer\n");
            let customer = [
                ("Name", details.customer_name.as_str()),
                ("Document", details.customer_document()),
                ("Email", details.customer_email.as_str()),
                ("Phone", details.customer_cellphone.as_str()),
                ("City", details.customer_city.as_str()),
                ("State", details.customer_state_code.as_str()),
            ];
            for (label, value) in customer {
                output.push_str(&format!("  {:<12} {}\n", label, or_dash(value)));
            }

            output.push_str("\nBank\n");
            output.push_str(&format!(
                "  {:<12} {} / {} / {}\n",
                "Account",
                or_dash(&details.bank_num),
                or_dash(&details.bank_branch),
                or_dash(&details.bank_account)
            ));

            if let Some(qr) = &details.qr_code {
                output.push_str(&format!("\nQR code: {}\n", or_dash(&qr.image)));
            }
            Ok(output)
        }
    }
}

#[derive(Serialize)]
struct HistoryListing<'a> {
    pix_id: &'a str,
    entries: &'a [HistoryEntry],
}

pub fn format_history(
    pix_id: &str,
    entries: &[HistoryEntry],
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(&HistoryListing { pix_id, entries }),
        OutputFormat::Console => {
            let mut output = format!("\n🕑 HISTORY {}\n{}\n", pix_id, RULE);
            if entries.is_empty() {
                output.push_str("No history recorded for this charge.\n");
                return Ok(output);
            }
            for entry in entries {
                output.push_str(&format!(
                    "{}  {:<12} {}\n",
                    or_dash(&entry.date_time),
                    or_dash(&entry.status),
                    or_dash(&entry.title)
                ));
                if !entry.description.trim().is_empty() {
                    output.push_str(&format!("    {}\n", entry.description));
                }
                if !entry.username.trim().is_empty() {
                    output.push_str(&format!("    by {}\n", entry.username));
                }
            }
            Ok(output)
        }
    }
}
