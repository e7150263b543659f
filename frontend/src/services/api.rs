use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{AddTransactionResponse, BalanceSummary, ChartDataset, NewTransaction, Transaction};
use thiserror::Error;

const GET_BALANCE: &str = "/api/get-balance";
const GET_TRANSACTIONS: &str = "/api/get-transactions";
const ADD_TRANSACTION: &str = "/api/add-transaction";
const DELETE_TRANSACTION: &str = "/api/delete-transaction";
const GET_CHART_DATA: &str = "/api/get-chart-data";

/// Generic message used when the backend rejects a transaction without saying why
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The backend answered but refused the change
    #[error("{0}")]
    Rejected(String),
}

/// Operations the finance backend exposes
#[async_trait(?Send)]
pub trait FinanceApi {
    async fn get_balance(&self) -> Result<BalanceSummary, ApiError>;

    async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    /// Create a transaction. `Ok` only when the backend confirms with `success: true`.
    async fn add_transaction(&self, request: &NewTransaction) -> Result<(), ApiError>;

    async fn delete_transaction(&self, id: i64) -> Result<(), ApiError>;

    async fn get_chart_data(&self) -> Result<ChartDataset, ApiError>;
}

/// API client for communicating with the backend server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_ok(response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[async_trait(?Send)]
impl FinanceApi for ApiClient {
    async fn get_balance(&self) -> Result<BalanceSummary, ApiError> {
        self.get_json(GET_BALANCE).await
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(GET_TRANSACTIONS).await
    }

    async fn add_transaction(&self, request: &NewTransaction) -> Result<(), ApiError> {
        let response = Request::post(&self.url(ADD_TRANSACTION))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Rejections still carry a JSON body with the reason
        let status_ok = response.ok();
        let body = response
            .json::<AddTransactionResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        interpret_add_response(status_ok, body)
    }

    async fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.url(DELETE_TRANSACTION), id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).map(|_| ())
    }

    async fn get_chart_data(&self) -> Result<ChartDataset, ApiError> {
        self.get_json(GET_CHART_DATA).await
    }
}

fn interpret_add_response(status_ok: bool, body: AddTransactionResponse) -> Result<(), ApiError> {
    if status_ok && body.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ))
    }
}
