use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use super::repo_types::{NewSavedQuery, SavedQueryRow};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQueryRequest {
    #[serde(default)]
    pub query: Option<Value>,
    #[serde(default)]
    pub results: Option<Value>,
    pub count: Option<i32>,
    pub avg_cal: Option<f64>,
}

impl SaveQueryRequest {
    /// `None` when the query is missing or empty. A non-array `results` is saved as `[]`.
    pub fn into_new(self) -> Option<NewSavedQuery> {
        let query = match self.query {
            Some(Value::String(q)) if !q.is_empty() => q,
            _ => return None,
        };
        let results = match self.results {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        Some(NewSavedQuery::new(query, results, self.count, self.avg_cal))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQueryResponse {
    pub ok: bool,
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQueryResponse {
    pub id: i32,
    pub query: String,
    pub results: Value,
    pub count: Option<i32>,
    pub avg_cal: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<SavedQueryRow> for SavedQueryResponse {
    fn from(r: SavedQueryRow) -> Self {
        Self {
            id: r.id,
            query: r.query_text,
            results: r.results.unwrap_or(Value::Null),
            count: r.count,
            avg_cal: r.avg_cal,
            created_at: r.created_at,
        }
    }
}
