//! Add-transaction form state and client-side validation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{NewTransaction, TransactionType};

/// Reasons a form submission is blocked before reaching the backend.
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Unknown transaction type: {0}")]
    InvalidType(String),
    #[error("Amount must be a number")]
    InvalidAmount(String),
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Date must be a valid calendar date (YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Type,
    Amount,
    Category,
    Date,
    Notes,
}

/// Raw text of every form input, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionForm {
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

impl TransactionForm {
    /// Empty form with the date input preset to `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Type => self.kind = value,
            FormField::Amount => self.amount = value,
            FormField::Category => self.category = value,
            FormField::Date => self.date = value,
            FormField::Notes => self.notes = value,
        }
    }

    /// Check the inputs and build the create request.
    ///
    /// Required fields are checked first so that a half-filled form reports
    /// the missing fields rather than whichever value happens to be malformed.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let required = [&self.kind, &self.amount, &self.category, &self.date];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }

        let kind: TransactionType = self.kind.trim().parse()?;

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        if amount <= 0.0 {
            return Err(ValidationError::AmountNotPositive);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        Ok(NewTransaction {
            kind,
            amount,
            category: self.category.trim().to_string(),
            date,
            notes: self.notes.clone(),
        })
    }
}
