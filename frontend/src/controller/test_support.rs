//! In-memory fakes for driving the controller without a browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{
    BalancePoint, BalanceSummary, CategoryTotal, ChartDataset, NewTransaction, Transaction,
    TransactionType,
};

use super::charts::{ChartError, ChartRenderer, ChartSpec, ChartSurface};
use super::ClientController;
use crate::services::{ApiError, FinanceApi, Host};

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn transaction(id: i64, kind: TransactionType, amount: f64, category: &str, date: &str) -> Transaction {
    Transaction {
        id,
        kind: kind.into(),
        amount,
        category: category.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        notes: None,
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        transaction(1, TransactionType::Income, 2500.0, "Salary", "2024-03-01"),
        transaction(2, TransactionType::Expense, 42.5, "Food", "2024-03-01"),
        transaction(3, TransactionType::Expense, 12.0, "Fast food", "2024-03-02"),
        transaction(4, TransactionType::Expense, 900.0, "Rent", "2024-03-03"),
        transaction(5, TransactionType::Income, 100.0, "Refund FOOD", "2024-03-04"),
    ]
}

fn sample_chart_data() -> ChartDataset {
    ChartDataset {
        expenses_by_category: vec![CategoryTotal {
            category: "Food".to_string(),
            amount: 54.5,
        }],
        balance_over_time: vec![BalancePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            balance: 2457.5,
        }],
    }
}

/// Backend that answers from memory and records every call by name
pub struct FakeBackend {
    calls: RefCell<Vec<&'static str>>,
    balance: RefCell<Result<BalanceSummary, ApiError>>,
    transactions: RefCell<Result<Vec<Transaction>, ApiError>>,
    chart_data: RefCell<Result<ChartDataset, ApiError>>,
    add_result: RefCell<Result<(), ApiError>>,
    delete_result: RefCell<Result<(), ApiError>>,
    last_request: RefCell<Option<NewTransaction>>,
    deleted_ids: RefCell<Vec<i64>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            balance: RefCell::new(Ok(BalanceSummary {
                balance: 2545.5,
                income: 2600.0,
                expense: 54.5,
            })),
            transactions: RefCell::new(Ok(sample_transactions())),
            chart_data: RefCell::new(Ok(sample_chart_data())),
            add_result: RefCell::new(Ok(())),
            delete_result: RefCell::new(Ok(())),
            last_request: RefCell::new(None),
            deleted_ids: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn last_request(&self) -> Option<NewTransaction> {
        self.last_request.borrow().clone()
    }

    pub fn deleted_ids(&self) -> Vec<i64> {
        self.deleted_ids.borrow().clone()
    }

    pub fn fail_balance(&self) {
        *self.balance.borrow_mut() = Err(ApiError::Network("offline".to_string()));
    }

    pub fn fail_transactions(&self) {
        *self.transactions.borrow_mut() = Err(ApiError::Status(500));
    }

    pub fn fail_chart_data(&self) {
        *self.chart_data.borrow_mut() = Err(ApiError::Parse("unexpected end of input".to_string()));
    }

    pub fn set_transactions(&self, transactions: Vec<Transaction>) {
        *self.transactions.borrow_mut() = Ok(transactions);
    }

    pub fn set_add_result(&self, result: Result<(), ApiError>) {
        *self.add_result.borrow_mut() = result;
    }

    pub fn set_delete_result(&self, result: Result<(), ApiError>) {
        *self.delete_result.borrow_mut() = result;
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl FinanceApi for Rc<FakeBackend> {
    async fn get_balance(&self) -> Result<BalanceSummary, ApiError> {
        self.record("get_balance");
        self.balance.borrow().clone()
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.record("get_transactions");
        self.transactions.borrow().clone()
    }

    async fn add_transaction(&self, request: &NewTransaction) -> Result<(), ApiError> {
        self.record("add_transaction");
        *self.last_request.borrow_mut() = Some(request.clone());
        self.add_result.borrow().clone()
    }

    async fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        self.record("delete_transaction");
        self.deleted_ids.borrow_mut().push(id);
        self.delete_result.borrow().clone()
    }

    async fn get_chart_data(&self) -> Result<ChartDataset, ApiError> {
        self.record("get_chart_data");
        self.chart_data.borrow().clone()
    }
}

/// Host that records dialogs and answers confirmations with a preset reply
pub struct FakeHost {
    confirm_answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirmations: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            confirm_answer: Cell::new(true),
            alerts: RefCell::new(Vec::new()),
            confirmations: RefCell::new(Vec::new()),
        }
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }
}

impl Host for Rc<FakeHost> {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn today(&self) -> NaiveDate {
        test_today()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Notice(String),
    Draw(ChartSpec),
}

/// Chart surface that records what would have been drawn
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
    unavailable: bool,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<Vec<SurfaceOp>>>) {
        let ops = Rc::new(RefCell::new(Vec::new()));
        let surface = Self {
            ops: ops.clone(),
            unavailable: false,
        };
        (surface, ops)
    }

    /// A surface whose canvas never mounted
    pub fn failing() -> (Self, Rc<RefCell<Vec<SurfaceOp>>>) {
        let (mut surface, ops) = Self::new();
        surface.unavailable = true;
        (surface, ops)
    }

    fn push(&self, op: SurfaceOp) -> Result<(), ChartError> {
        if self.unavailable {
            return Err(ChartError::CanvasUnavailable);
        }
        self.ops.borrow_mut().push(op);
        Ok(())
    }
}

impl ChartSurface for RecordingSurface {
    fn clear(&mut self) -> Result<(), ChartError> {
        self.push(SurfaceOp::Clear)
    }

    fn show_notice(&mut self, text: &str) -> Result<(), ChartError> {
        self.push(SurfaceOp::Notice(text.to_string()))
    }

    fn draw(&mut self, chart: &ChartSpec) -> Result<(), ChartError> {
        self.push(SurfaceOp::Draw(chart.clone()))
    }
}

pub type TestController = ClientController<Rc<FakeBackend>, Rc<FakeHost>>;

/// A controller wired to fakes, plus handles for inspecting them
pub struct Fixture {
    pub backend: Rc<FakeBackend>,
    pub host: Rc<FakeHost>,
    pub controller: TestController,
    pub category_ops: Rc<RefCell<Vec<SurfaceOp>>>,
    pub balance_ops: Rc<RefCell<Vec<SurfaceOp>>>,
    changes: Rc<Cell<u32>>,
}

impl Fixture {
    pub fn new() -> Self {
        let backend = Rc::new(FakeBackend::new());
        let host = Rc::new(FakeHost::new());
        let (category_surface, category_ops) = RecordingSurface::new();
        let (balance_surface, balance_ops) = RecordingSurface::new();
        let charts = ChartRenderer::new(Box::new(category_surface), Box::new(balance_surface));

        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let controller = ClientController::new(backend.clone(), host.clone(), charts, move || {
            counter.set(counter.get() + 1)
        });

        Self {
            backend,
            host,
            controller,
            category_ops,
            balance_ops,
            changes,
        }
    }

    /// How many times the controller asked the page to re-render
    pub fn changes(&self) -> u32 {
        self.changes.get()
    }
}
