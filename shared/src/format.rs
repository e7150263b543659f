//! Display formatting for amounts and dates.
//!
//! All amounts are US dollars: `$` prefix, two decimals, comma thousands
//! separators and a leading `-` for negative values. Dates are calendar dates
//! without a time zone and are rendered in short English form.

use std::sync::OnceLock;

use chrono::NaiveDate;
use numfmt::{Formatter, Precision};

use crate::TransactionKind;

/// Format an amount as US currency, e.g. `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let cents = (amount.abs() * 100.0).round() as u64;
    let (dollars, remainder) = (cents / 100, cents % 100);
    let negative = amount < 0.0 && cents != 0;
    let prefix = if negative { "-$" } else { "$" };

    // numfmt renders zero as "0" and trims trailing zeros, so it only groups
    // the whole dollars and the cents are appended here.
    let formatter = if negative {
        NEGATIVE_FMT.get_or_init(|| whole_dollar_formatter("-$"))
    } else {
        POSITIVE_FMT.get_or_init(|| whole_dollar_formatter("$"))
    };
    let whole = match formatter {
        Some(formatter) if dollars > 0 => formatter.fmt_string(dollars as f64),
        _ => format!("{}{}", prefix, dollars),
    };

    format!("{}.{:02}", whole, remainder)
}

fn whole_dollar_formatter(prefix: &str) -> Option<Formatter> {
    Formatter::currency(prefix)
        .ok()
        .map(|formatter| formatter.precision(Precision::Decimals(0)))
}

/// Amount column text: `+` for income, `-` for expenses, then the currency value
pub fn format_signed_amount(kind: &TransactionKind, amount: f64) -> String {
    format!("{}{}", kind.sign(), format_currency(amount))
}

/// Table date, e.g. `Mar 1, 2024`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Chart axis date, e.g. `Mar 1`
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Chart tick label rounded to whole dollars, e.g. `1234.6` -> `$1235`
pub fn format_whole_dollars(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0
    let whole = value.round() + 0.0;
    format!("${:.0}", whole)
}
