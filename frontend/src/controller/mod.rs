//! Client-side controller for the finance dashboard.
//!
//! [`ClientController`] owns all page state: the balance figures, the cached
//! transaction list, the add-transaction form and the two chart slots. Its
//! behavior is split by responsibility:
//!
//! - `balance`: loads the aggregate totals
//! - `store`: loads, filters and deletes transactions
//! - `form`: validates and submits new transactions
//! - `charts`: loads chart data and redraws both charts
//!
//! Every mutation is followed by a full reload of balance, transactions and
//! charts rather than a local patch. The controller is single-threaded; its
//! `RefCell`s are never borrowed across an `.await`.

use std::cell::{Ref, RefCell};

use shared::TransactionForm;

use crate::services::{FinanceApi, Host};

pub mod balance;
pub mod charts;
pub mod form;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use balance::BalanceDisplay;
pub use charts::{ChartError, ChartRenderer, ChartSpec, ChartSurface};
pub use store::TransactionStore;

/// Everything the page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub balance: BalanceDisplay,
    pub store: TransactionStore,
    pub form: TransactionForm,
    /// A create request is in flight
    pub submitting: bool,
}

pub struct ClientController<A, H> {
    api: A,
    host: H,
    state: RefCell<DashboardState>,
    charts: RefCell<ChartRenderer>,
    on_change: Box<dyn Fn()>,
}

impl<A: FinanceApi, H: Host> ClientController<A, H> {
    /// `on_change` is called after every state change that affects the page
    pub fn new(api: A, host: H, charts: ChartRenderer, on_change: impl Fn() + 'static) -> Self {
        let form = TransactionForm::blank(host.today());
        Self {
            api,
            host,
            state: RefCell::new(DashboardState {
                balance: BalanceDisplay::default(),
                store: TransactionStore::new(),
                form,
                submitting: false,
            }),
            charts: RefCell::new(charts),
            on_change: Box::new(on_change),
        }
    }

    pub fn state(&self) -> Ref<'_, DashboardState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state().clone()
    }

    pub fn charts(&self) -> Ref<'_, ChartRenderer> {
        self.charts.borrow()
    }

    /// Re-run all three read paths: balance, transactions, charts
    pub async fn refresh_all(&self) {
        self.load_balance().await;
        self.load_transactions().await;
        self.load_charts().await;
    }

    /// Apply `change` to the state, then notify the page.
    /// The borrow ends before `on_change` runs, since it may re-render.
    fn update(&self, change: impl FnOnce(&mut DashboardState)) {
        change(&mut self.state.borrow_mut());
        (self.on_change)();
    }
}
