// Shared helpers for driving the router without a running server.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use nutrition_finder::{
    app::build_app,
    config::{AppConfig, FdcConfig, DEFAULT_FDC_BASE_URL},
    fdc::{FdcError, FoodProvider, SearchOptions},
    state::AppState,
};

pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
    MissingKey,
}

/// Provider double that records every call.
pub struct FakeProvider {
    reply: Reply,
    pub searches: Mutex<Vec<SearchOptions>>,
    pub lookups: Mutex<Vec<i64>>,
}

impl FakeProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            searches: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        })
    }

    fn answer(&self, operation: &'static str) -> Result<Value, FdcError> {
        match &self.reply {
            Reply::Json(v) => Ok(v.clone()),
            Reply::Status(status, body) => Err(FdcError::Status {
                operation,
                status: *status,
                body: body.to_string(),
            }),
            Reply::MissingKey => Err(FdcError::MissingApiKey),
        }
    }
}

#[async_trait]
impl FoodProvider for FakeProvider {
    async fn search_foods(&self, opts: &SearchOptions) -> Result<Value, FdcError> {
        self.searches.lock().unwrap().push(opts.clone());
        self.answer("search")
    }

    async fn get_food_by_id(&self, fdc_id: i64) -> Result<Value, FdcError> {
        self.lookups.lock().unwrap().push(fdc_id);
        self.answer("getFood")
    }
}

pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        database_url: None,
        fdc: FdcConfig {
            base_url: DEFAULT_FDC_BASE_URL.into(),
            api_key: Some("test-key".into()),
        },
    })
}

pub fn app(db: Option<PgPool>, provider: Arc<FakeProvider>) -> Router {
    build_app(AppState::from_parts(db, test_config(), provider))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Pool for database tests. Panics when `TEST_DATABASE_URL` is unset so an
/// ignored test run without a database fails instead of passing empty.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a Postgres database for --ignored tests");
    let pool = PgPool::connect(&url).await.expect("connect TEST_DATABASE_URL");
    nutrition_finder::db::ensure_schema(&pool)
        .await
        .expect("create saved_queries");
    pool
}
