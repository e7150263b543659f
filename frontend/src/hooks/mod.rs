pub mod use_dashboard;
pub mod use_periodic_refresh;

pub use use_dashboard::use_dashboard;
