//! Transaction table rows.

use crate::{format_short_date, format_signed_amount, Transaction};

/// Text of the single row shown when there is nothing to list
pub const PLACEHOLDER_TEXT: &str = "No transactions yet";

/// One formatted table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Target of the row's delete button
    pub id: i64,
    pub date: String,
    pub type_label: String,
    pub css_class: &'static str,
    pub category: String,
    pub amount: String,
    pub notes: String,
}

impl From<&Transaction> for RowView {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            date: format_short_date(tx.date),
            type_label: tx.kind.label(),
            css_class: tx.kind.css_class(),
            category: tx.category.clone(),
            amount: format_signed_amount(&tx.kind, tx.amount),
            notes: tx.notes_or_dash().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Placeholder,
    Entry(RowView),
}

/// Rows for `transactions`: one per transaction, or a lone placeholder when empty
pub fn render_rows(transactions: &[Transaction]) -> Vec<TableRow> {
    if transactions.is_empty() {
        return vec![TableRow::Placeholder];
    }
    transactions
        .iter()
        .map(|tx| TableRow::Entry(RowView::from(tx)))
        .collect()
}
