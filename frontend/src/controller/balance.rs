use shared::{format_currency, BalanceSummary};

use super::ClientController;
use crate::services::{FinanceApi, Host};

const TARGET: &str = "balance-loader";

/// The three headline figures, already formatted as currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDisplay {
    pub balance: String,
    pub income: String,
    pub expense: String,
}

impl Default for BalanceDisplay {
    fn default() -> Self {
        Self::from(&BalanceSummary::default())
    }
}

impl From<&BalanceSummary> for BalanceDisplay {
    fn from(summary: &BalanceSummary) -> Self {
        Self {
            balance: format_currency(summary.balance),
            income: format_currency(summary.income),
            expense: format_currency(summary.expense),
        }
    }
}

impl<A: FinanceApi, H: Host> ClientController<A, H> {
    /// Fetch the totals. On failure the figures already shown stay as they are.
    pub async fn load_balance(&self) {
        match self.api.get_balance().await {
            Ok(summary) => {
                let display = BalanceDisplay::from(&summary);
                self.update(|state| state.balance = display);
            }
            Err(e) => log::error!(target: TARGET, "Error loading balance: {}", e),
        }
    }
}
