use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

mod form;
mod format;
mod table;

pub use form::{FormField, TransactionForm, ValidationError};
pub use format::{
    format_currency, format_month_day, format_short_date, format_signed_amount,
    format_whole_dollars,
};
pub use table::{render_rows, RowView, TableRow, PLACEHOLDER_TEXT};

/// Whether a transaction adds money or takes it away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Wire value, also used as the `<select>` option value
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Upper-cased badge text shown in the table
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    /// CSS class that colors income and expense cells differently
    pub fn css_class(&self) -> &'static str {
        self.as_str()
    }

    /// Sign prefixed to the amount column
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ValidationError::InvalidType(other.to_string())),
        }
    }
}

/// Type of a stored transaction.
///
/// The backend does not validate `type`, so rows may carry a value this page
/// does not know. Those keep their raw text and are shown like expenses
/// instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionKind {
    Known(TransactionType),
    Other(String),
}

impl TransactionKind {
    /// Raw wire value
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Known(kind) => kind.as_str(),
            TransactionKind::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> String {
        match self {
            TransactionKind::Known(kind) => kind.label().to_string(),
            TransactionKind::Other(raw) => raw.to_uppercase(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionKind::Known(kind) => kind.css_class(),
            TransactionKind::Other(_) => TransactionType::Expense.css_class(),
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            TransactionKind::Known(kind) => kind.sign(),
            TransactionKind::Other(_) => TransactionType::Expense.sign(),
        }
    }
}

impl From<TransactionType> for TransactionKind {
    fn from(kind: TransactionType) -> Self {
        TransactionKind::Known(kind)
    }
}

impl PartialEq<TransactionType> for TransactionKind {
    fn eq(&self, other: &TransactionType) -> bool {
        matches!(self, TransactionKind::Known(kind) if kind == other)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense record as returned by `/api/get-transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned, unique
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    /// Calendar date, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Transaction {
    /// Notes for display, `-` when there are none
    pub fn notes_or_dash(&self) -> &str {
        match self.notes.as_deref() {
            Some(notes) if !notes.is_empty() => notes,
            _ => "-",
        }
    }
}

/// Aggregate totals from `/api/get-balance`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Running balance at the end of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Response of `/api/get-chart-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub expenses_by_category: Vec<CategoryTotal>,
    #[serde(default)]
    pub balance_over_time: Vec<BalancePoint>,
}

/// Body of `POST /api/add-transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub notes: String,
}

/// Response of `POST /api/add-transaction`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddTransactionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Category substring and type constraint applied to the cached list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    category: String,
    kind: String,
}

impl TransactionFilter {
    /// Build a filter from the raw filter inputs. An empty type means any type.
    pub fn from_inputs(category: &str, kind: &str) -> Self {
        Self {
            category: category.to_lowercase(),
            kind: kind.to_string(),
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_category = transaction
            .category
            .to_lowercase()
            .contains(&self.category);
        let matches_type = self.kind.is_empty() || transaction.kind.as_str() == self.kind;
        matches_category && matches_type
    }

    /// Subset of `transactions` that match, in their original order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_transaction_deserializes_from_backend_row() {
        let json = r#"{"id": 7, "user_id": 1, "type": "expense", "amount": 42.5,
            "category": "Food", "date": "2024-03-01", "notes": ""}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.amount, 42.5);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(tx.notes_or_dash(), "-");
    }

    #[test]
    fn test_transaction_notes_null_or_missing() {
        let with_null = r#"{"id": 1, "type": "income", "amount": 1, "category": "a", "date": "2024-01-01", "notes": null}"#;
        let missing = r#"{"id": 2, "type": "income", "amount": 1, "category": "a", "date": "2024-01-01"}"#;

        let a: Transaction = serde_json::from_str(with_null).unwrap();
        let b: Transaction = serde_json::from_str(missing).unwrap();
        assert_eq!(a.notes, None);
        assert_eq!(b.notes, None);
        assert_eq!(b.notes_or_dash(), "-");
    }

    #[test]
    fn test_new_transaction_serializes_type_field() {
        let request = NewTransaction {
            kind: TransactionType::Income,
            amount: 10.0,
            category: "Gift".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "income");
        assert_eq!(value["date"], "2024-05-02");
        assert_eq!(value["notes"], "");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_add_transaction_response_defaults() {
        let failure: AddTransactionResponse =
            serde_json::from_str(r#"{"error": "Missing required fields"}"#).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.error.as_deref(), Some("Missing required fields"));

        let ok: AddTransactionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.error, None);
    }

    #[test]
    fn test_chart_dataset_deserializes() {
        let json = r#"{
            "expenses_by_category": [{"category": "Food", "amount": 54.5}],
            "balance_over_time": [{"date": "2024-03-01", "balance": 2457.5}]
        }"#;
        let data: ChartDataset = serde_json::from_str(json).unwrap();

        assert_eq!(data.expenses_by_category.len(), 1);
        assert_eq!(data.balance_over_time[0].balance, 2457.5);
    }

    #[test]
    fn test_unknown_type_keeps_the_rest_of_the_list() {
        let json = r#"[
            {"id": 1, "type": "income", "amount": 10, "category": "Gift", "date": "2024-03-01"},
            {"id": 2, "type": "Expense", "amount": 5, "category": "Food", "date": "2024-03-02"}
        ]"#;
        let list: Vec<Transaction> = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].kind, TransactionType::Income);
        assert_eq!(list[1].kind, TransactionKind::Other("Expense".to_string()));
        assert_eq!(list[1].kind.css_class(), "expense");
        assert_eq!(list[1].kind.sign(), "-");
        assert_eq!(list[1].kind.label(), "EXPENSE");
    }

    #[test]
    fn test_filter_type_compares_raw_value() {
        let mut odd = transaction(9, TransactionType::Expense, 1.0, "Food", "2024-03-01");
        odd.kind = TransactionKind::Other("transfer".to_string());
        let all = vec![odd];

        assert!(TransactionFilter::from_inputs("", "expense").apply(&all).is_empty());
        assert_eq!(TransactionFilter::from_inputs("", "transfer").apply(&all).len(), 1);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert_eq!(
            "Expense".parse::<TransactionType>(),
            Err(ValidationError::InvalidType("Expense".to_string()))
        );
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let all = sample_transactions();
        let filter = TransactionFilter::from_inputs("", "");

        assert_eq!(filter.apply(&all), all);
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_filter_category_is_case_insensitive_substring() {
        let all = sample_transactions();
        let filtered = TransactionFilter::from_inputs("fOoD", "").apply(&all);

        let ids: Vec<i64> = filtered.iter().map(|tx| tx.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
    }

    #[test]
    fn test_filter_type_must_match_exactly() {
        let all = sample_transactions();

        let expenses = TransactionFilter::from_inputs("food", "expense").apply(&all);
        assert_eq!(expenses.iter().map(|tx| tx.id).collect::<Vec<_>>(), vec![2, 3]);

        let income = TransactionFilter::from_inputs("", "income").apply(&all);
        assert!(income.iter().all(|tx| tx.kind == TransactionType::Income));
        assert_eq!(income.len(), 2);

        let unknown = TransactionFilter::from_inputs("", "transfer").apply(&all);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample_transactions();
        let filter = TransactionFilter::from_inputs("o", "expense");

        let once = filter.apply(&all);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }
}
