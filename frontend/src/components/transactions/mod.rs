pub mod transaction_filters;
pub mod transaction_table;

pub use transaction_filters::TransactionFilters;
pub use transaction_table::TransactionTable;
