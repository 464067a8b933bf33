use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

#[derive(Debug, Error)]
pub enum FdcError {
    #[error("Missing query")]
    EmptyQuery,

    #[error("FDC API key not configured. Set FDC_API_KEY or USDA_API_KEY in environment.")]
    MissingApiKey,

    #[error("FDC {operation} failed: {status} {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("FDC request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: String,
    pub page_size: u32,
    pub page_number: u32,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}

/// Source of raw food records. Payloads are returned exactly as the provider sent them.
#[async_trait]
pub trait FoodProvider: Send + Sync {
    async fn search_foods(&self, opts: &SearchOptions) -> Result<Value, FdcError>;
    async fn get_food_by_id(&self, fdc_id: i64) -> Result<Value, FdcError>;
}

#[derive(Debug, Clone)]
pub struct FdcClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FdcClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn api_key(&self) -> Result<&str, FdcError> {
        self.api_key.as_deref().ok_or(FdcError::MissingApiKey)
    }
}

#[async_trait]
impl FoodProvider for FdcClient {
    #[instrument(skip(self, opts), fields(query = %opts.query, page = opts.page_number))]
    async fn search_foods(&self, opts: &SearchOptions) -> Result<Value, FdcError> {
        if opts.query.is_empty() {
            return Err(FdcError::EmptyQuery);
        }
        let api_key = self.api_key()?;
        let page_size = opts.page_size.to_string();
        let page_number = opts.page_number.to_string();

        let res = self
            .http
            .get(format!("{}/foods/search", self.base_url))
            .query(&[
                ("api_key", api_key),
                ("query", opts.query.as_str()),
                ("pageSize", page_size.as_str()),
                ("pageNumber", page_number.as_str()),
            ])
            .send()
            .await?;

        read_json("search", res).await
    }

    #[instrument(skip(self))]
    async fn get_food_by_id(&self, fdc_id: i64) -> Result<Value, FdcError> {
        let api_key = self.api_key()?;
        let res = self
            .http
            .get(format!("{}/food/{}", self.base_url, fdc_id))
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        read_json("getFood", res).await
    }
}

async fn read_json(operation: &'static str, res: Response) -> Result<Value, FdcError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(FdcError::Status {
            operation,
            status: status.as_u16(),
            body,
        });
    }
    debug!(operation, %status, "fdc response");
    Ok(res.json::<Value>().await?)
}
