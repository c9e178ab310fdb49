//! Grouping reducer: fold per-day records into one summary per bank

use crate::types::DailyRecord;
use std::collections::HashMap;

/// One bank's totals across every day of a window
///
/// Same shape as a [`DailyRecord`]: counts and amounts are sums, percentages
/// are recomputed from the summed amounts, and `date` is the most recent day
/// seen for the bank.
pub type GroupedBankSummary = DailyRecord;

/// Fold records by bank identifier
///
/// Output order is the order in which each bank first appears in `records`.
/// Grouping an already grouped result returns it unchanged.
pub fn group_by_bank(records: &[DailyRecord]) -> Vec<GroupedBankSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<GroupedBankSummary> = Vec::new();

    for record in records {
        match positions.get(record.bank_num.as_str()) {
            Some(&position) => grouped[position].absorb(record),
            None => {
                positions.insert(record.bank_num.as_str(), grouped.len());
                let mut first = record.clone();
                first.recompute_percentages();
                grouped.push(first);
            }
        }
    }

    grouped
}
