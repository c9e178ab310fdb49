//! Charge summary report formatters

use super::utils::{export_json, RULE};
use super::OutputFormat;
use crate::analysis::grouping::group_by_bank;
use crate::analysis::statistics::SummaryStatistics;
use crate::errors::AppResult;
use crate::fetch::{DayOutcome, ReduceMode, SummaryReport};
use crate::types::DailyRecord;
use crate::utils::currency::{format_brl, format_count, format_percent};
use crate::utils::time::format_date;
use serde::Serialize;

/// Format the summary as returned: one row per bank and day, or per bank
/// when the fetch already summed by bank
pub fn format_summary(report: &SummaryReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let title = match report.reduce_mode {
                ReduceMode::Concat => "PIX CHARGE SUMMARY",
                ReduceMode::SumByBank => "PIX CHARGE SUMMARY (SUMMED BY BANK)",
            };
            let mut output = header(title, report);
            output.push_str(&format_records(&report.records));
            output.push_str(&format_statistics(&report.statistics));
            output.push_str(&format_days(report));
            Ok(output)
        }
    }
}

/// JSON shape of the grouped view
#[derive(Serialize)]
struct GroupedSummary<'a> {
    report: &'a SummaryReport,
    grouped: Vec<DailyRecord>,
    grouped_statistics: SummaryStatistics,
}

/// Format the summary with rows folded by bank for display
pub fn format_grouped_summary(report: &SummaryReport, format: &OutputFormat) -> AppResult<String> {
    let grouped = group_by_bank(&report.records);
    let grouped_statistics = SummaryStatistics::from_records(&grouped);

    match format {
        OutputFormat::Json => export_json(&GroupedSummary {
            report,
            grouped,
            grouped_statistics,
        }),
        OutputFormat::Console => {
            let mut output = header("PIX CHARGE SUMMARY BY BANK", report);
            output.push_str(&format_records(&grouped));
            output.push_str(&format_statistics(&grouped_statistics));
            output.push_str(&format_days(report));
            Ok(output)
        }
    }
}

fn header(title: &str, report: &SummaryReport) -> String {
    let mut output = format!("\n📊 {}\n{}\n", title, RULE);
    output.push_str(&format!("Period:      {}\n", report.window));
    if let Some(bank) = &report.bank_filter {
        output.push_str(&format!("Bank:        {}\n", bank));
    }
    output.push('\n');
    output
}

fn format_records(records: &[DailyRecord]) -> String {
    if records.is_empty() {
        return "No transactions found for this period.\n\n".to_string();
    }

    let mut output = format!(
        "{:<6} {:<10} {:>8} {:>16} {:>16} {:>16} {:>16} {:>8} {:>8} {:>8}\n",
        "Bank", "Date", "Count", "Total", "Active", "Expired", "Paid", "Active%", "Exp%", "Paid%"
    );
    for record in records {
        output.push_str(&format!(
            "{:<6} {:<10} {:>8} {:>16} {:>16} {:>16} {:>16} {:>8} {:>8} {:>8}\n",
            record.bank_num,
            record.date,
            format_count(record.total_count),
            format_brl(record.total_amount),
            format_brl(record.active_amount),
            format_brl(record.expired_amount),
            format_brl(record.paid_amount),
            format_percent(record.active_percent),
            format_percent(record.expired_percent),
            format_percent(record.paid_percent),
        ));
    }
    output.push('\n');
    output
}

fn format_statistics(stats: &SummaryStatistics) -> String {
    let mut output = String::from("Totals\n");
    output.push_str(&format!("  Amount:        {}\n", format_brl(stats.total_amount)));
    output.push_str(&format!(
        "  Transactions:  {}\n",
        format_count(stats.total_transactions)
    ));
    output.push_str(&format!(
        "  Paid:          {}\n",
        format_count(stats.paid_transactions)
    ));
    output.push_str(&format!(
        "  Pending:       {}\n",
        format_count(stats.pending_transactions)
    ));
    output.push_str(&format!(
        "  Average:       {}\n\n",
        format_brl(stats.average_amount)
    ));
    output
}

fn format_days(report: &SummaryReport) -> String {
    let mut output = format!(
        "Days with data: {}/{}",
        report.days_with_data.len(),
        report.days.len()
    );
    if !report.days_with_data.is_empty() {
        let days: Vec<String> = report.days_with_data.iter().map(|d| format_date(*d)).collect();
        output.push_str(&format!(" ({})", days.join(", ")));
    }
    output.push('\n');

    for day in &report.days {
        if let DayOutcome::Failed(reason) = &day.outcome {
            output.push_str(&format!("  ⚠ {} failed: {}\n", format_date(day.day), reason));
        }
    }

    let perf = &report.performance;
    output.push_str(&format!(
        "Requests: {} | total {:.0} ms | avg {:.0} ms | wall {:.0} ms | efficiency {:.0}%\n",
        perf.request_count,
        perf.total_request_time_ms,
        perf.avg_time_per_request_ms,
        perf.parallel_time_ms,
        perf.efficiency_percent
    ));
    output
}
