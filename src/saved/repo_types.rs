use serde_json::Value;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct SavedQueryRow {
    pub id: i32,
    pub query_text: String,
    pub results: Option<Value>,
    pub count: Option<i32>,
    pub avg_cal: Option<f64>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, FromRow)]
pub struct InsertedRow {
    pub id: i32,
    pub created_at: OffsetDateTime,
}

/// Values for one insert, after truncation and defaulting.
#[derive(Debug, Clone)]
pub struct NewSavedQuery {
    pub query: String,
    pub results: Vec<Value>,
    pub count: i32,
    pub avg_cal: Option<f64>,
}

pub const MAX_RESULTS: usize = 500;

impl NewSavedQuery {
    /// Keeps the first 500 results; `count` falls back to the number kept.
    pub fn new(query: String, mut results: Vec<Value>, count: Option<i32>, avg_cal: Option<f64>) -> Self {
        results.truncate(MAX_RESULTS);
        let count = count.unwrap_or(results.len() as i32);
        Self {
            query,
            results,
            count,
            avg_cal,
        }
    }
}
