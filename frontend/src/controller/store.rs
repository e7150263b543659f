use shared::{render_rows, TableRow, Transaction, TransactionFilter};

use super::ClientController;
use crate::services::{FinanceApi, Host};

const TARGET: &str = "transaction-store";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this transaction?";
pub const DELETE_SUCCESS: &str = "Transaction deleted successfully!";
pub const DELETE_FAILURE: &str = "Error deleting transaction";

/// Cached transaction list and the table rows currently shown
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    all: Vec<Transaction>,
    rows: Vec<TableRow>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            rows: render_rows(&[]),
        }
    }

    /// Swap in a freshly fetched list and show all of it
    pub fn replace(&mut self, transactions: Vec<Transaction>) {
        self.all = transactions;
        self.rows = render_rows(&self.all);
    }

    /// Show only the cached transactions matching `filter`
    pub fn filter(&mut self, filter: &TransactionFilter) {
        self.rows = render_rows(&filter.apply(&self.all));
    }

    pub fn all(&self) -> &[Transaction] {
        &self.all
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: FinanceApi, H: Host> ClientController<A, H> {
    /// Fetch every transaction and show the unfiltered list
    pub async fn load_transactions(&self) {
        match self.api.get_transactions().await {
            Ok(transactions) => {
                log::debug!(target: TARGET, "Loaded {} transactions", transactions.len());
                self.update(|state| state.store.replace(transactions));
            }
            Err(e) => log::error!(target: TARGET, "Error loading transactions: {}", e),
        }
    }

    /// Narrow the table to the cached transactions matching the filter inputs.
    /// An empty `kind` accepts both types.
    pub fn filter_transactions(&self, category: &str, kind: &str) {
        let filter = TransactionFilter::from_inputs(category, kind);
        self.update(|state| state.store.filter(&filter));
    }

    /// Delete after asking the user, then reload everything
    pub async fn delete_transaction(&self, id: i64) {
        if !self.host.confirm(DELETE_CONFIRMATION) {
            return;
        }

        match self.api.delete_transaction(id).await {
            Ok(()) => {
                log::info!(target: TARGET, "Deleted transaction {}", id);
                self.refresh_all().await;
                self.host.alert(DELETE_SUCCESS);
            }
            Err(e) => {
                log::error!(target: TARGET, "Error deleting transaction {}: {}", id, e);
                self.host.alert(DELETE_FAILURE);
            }
        }
    }
}
