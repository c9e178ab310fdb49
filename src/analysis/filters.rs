//! Search and status filtering of transaction rows

use crate::types::PixTransaction;
use std::collections::BTreeSet;

/// Status value meaning "no status filter"
pub const ALL_STATUSES: &str = "all";

/// Client-side filter over a bank's transaction list
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Matched case-insensitively against customer name, email and txid, and
    /// as a plain substring against CPF/CNPJ
    pub search: Option<String>,
    /// Matched case-insensitively against the transaction status
    pub status: Option<String>,
}

impl TransactionFilter {
    pub fn new(search: Option<String>, status: Option<String>) -> Self {
        Self { search, status }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.status_term().is_none()
    }

    pub fn matches(&self, transaction: &PixTransaction) -> bool {
        if let Some(term) = self.search_term() {
            let lowered = term.to_lowercase();
            let hit = transaction.customer_name.to_lowercase().contains(&lowered)
                || transaction.customer_cpf.contains(term)
                || transaction.customer_cnpj.contains(term)
                || transaction.customer_email.to_lowercase().contains(&lowered)
                || transaction.txid.to_lowercase().contains(&lowered);
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status_term() {
            if !transaction.status.eq_ignore_ascii_case(status) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, transactions: &'a [PixTransaction]) -> Vec<&'a PixTransaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }

    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    fn status_term(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|status| !status.is_empty() && !status.eq_ignore_ascii_case(ALL_STATUSES))
    }
}

/// Distinct statuses present in a transaction list, sorted
pub fn available_statuses(transactions: &[PixTransaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.status.clone())
        .filter(|status| !status.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
