pub mod api;
pub mod canvas;
pub mod date_utils;
pub mod host;
pub mod logging;

pub use api::{ApiClient, ApiError, FinanceApi};
pub use canvas::CanvasSurface;
pub use host::{BrowserHost, Host};
