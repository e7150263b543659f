use chrono::NaiveDate;

use super::date_utils;

/// Blocking dialogs and the clock, provided by the page
pub trait Host {
    fn alert(&self, message: &str);

    /// Ask the user a yes/no question
    fn confirm(&self, message: &str) -> bool;

    fn today(&self) -> NaiveDate;
}

/// `Host` backed by `window.alert`, `window.confirm` and `Date`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    fn today(&self) -> NaiveDate {
        date_utils::today()
    }
}
