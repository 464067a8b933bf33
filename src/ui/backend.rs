use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Error string returned by the server, or `"<status> <reason>"` when it sent none.
    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    pub query: String,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBody {
    pub query: String,
    pub results: Vec<Value>,
    pub count: usize,
    pub avg_cal: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAck {
    #[serde(default)]
    pub ok: bool,
    pub id: Option<i32>,
    pub created_at: Option<String>,
}

/// One row of the saved list. Results are left out; `view_saved` fetches them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSummary {
    pub id: i32,
    pub query: String,
    pub count: Option<i32>,
    pub avg_cal: Option<f64>,
    pub created_at: String,
}

/// The HTTP endpoints as the view sees them.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn search(&self, body: &SearchBody) -> Result<Value, BackendError>;
    async fn save(&self, body: &SaveBody) -> Result<SaveAck, BackendError>;
    async fn list_saved(&self) -> Result<Vec<SavedSummary>, BackendError>;
    async fn get_saved(&self, id: i32) -> Result<Value, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` points at the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn search(&self, body: &SearchBody) -> Result<Value, BackendError> {
        let res = self
            .http
            .post(format!("{}/search", self.base_url))
            .json(body)
            .send()
            .await?;
        read_json(res).await
    }

    async fn save(&self, body: &SaveBody) -> Result<SaveAck, BackendError> {
        let res = self
            .http
            .post(format!("{}/saved", self.base_url))
            .json(body)
            .send()
            .await?;
        read_json(res).await
    }

    async fn list_saved(&self) -> Result<Vec<SavedSummary>, BackendError> {
        let res = self
            .http
            .get(format!("{}/saved", self.base_url))
            .send()
            .await?;
        read_json(res).await
    }

    async fn get_saved(&self, id: i32) -> Result<Value, BackendError> {
        let res = self
            .http
            .get(format!("{}/saved/{}", self.base_url, id))
            .send()
            .await?;
        read_json(res).await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, BackendError> {
    let status = res.status();
    if !status.is_success() {
        let body: Value = res.json().await.unwrap_or(Value::Null);
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| status.to_string());
        return Err(BackendError::Api(message));
    }
    Ok(res.json::<T>().await?)
}
