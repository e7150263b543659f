use shared::{FormField, TransactionForm};

use super::ClientController;
use crate::services::{ApiError, FinanceApi, Host};

const TARGET: &str = "transaction-form";

pub const ADD_SUCCESS: &str = "Transaction added successfully!";
pub const ADD_FAILURE: &str = "Error adding transaction";

impl<A: FinanceApi, H: Host> ClientController<A, H> {
    pub fn update_form(&self, field: FormField, value: String) {
        self.update(|state| state.form.set(field, value));
    }

    /// Validate the form and create the transaction.
    ///
    /// Invalid input is reported without contacting the backend. On success
    /// the form is cleared (date back to today) and everything is reloaded;
    /// on any failure the form keeps what the user typed.
    pub async fn submit_form(&self) {
        let form = self.state.borrow().form.clone();
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                log::warn!(target: TARGET, "Rejected form input: {}", e);
                self.host.alert(&e.to_string());
                return;
            }
        };

        self.update(|state| state.submitting = true);
        let result = self.api.add_transaction(&request).await;
        self.update(|state| state.submitting = false);

        match result {
            Ok(()) => {
                log::info!(
                    target: TARGET,
                    "Added {} of {} in {}",
                    request.kind,
                    request.amount,
                    request.category
                );
                let blank = TransactionForm::blank(self.host.today());
                self.update(|state| state.form = blank);
                self.refresh_all().await;
                self.host.alert(ADD_SUCCESS);
            }
            Err(ApiError::Rejected(reason)) => {
                log::warn!(target: TARGET, "Backend rejected transaction: {}", reason);
                self.host.alert(&format!("{}: {}", ADD_FAILURE, reason));
            }
            Err(e) => {
                log::error!(target: TARGET, "Error adding transaction: {}", e);
                self.host.alert(ADD_FAILURE);
            }
        }
    }
}
