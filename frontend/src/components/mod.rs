pub mod charts_panel;
pub mod forms;
pub mod header;
pub mod transactions;

pub use charts_panel::ChartsPanel;
pub use forms::TransactionFormView;
pub use header::Header;
pub use transactions::{TransactionFilters, TransactionTable};
