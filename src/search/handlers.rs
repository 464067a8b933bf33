use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

use super::dto::SearchRequest;

pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(search).get(search_hint))
        .route("/foods/:fdc_id", get(get_food))
}

#[instrument(skip(state, payload))]
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = payload?;
    let Some(opts) = body.into_options() else {
        warn!("search without query");
        return Err(AppError::BadRequest("Missing query".into()));
    };

    let data = state.provider.search_foods(&opts).await?;
    info!(
        query = %opts.query,
        page_size = opts.page_size,
        page_number = opts.page_number,
        "search completed"
    );
    Ok(Json(data))
}

pub async fn search_hint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Use POST with { query }" })),
    )
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(fdc_id): Path<String>,
) -> AppResult<Json<Value>> {
    let fdc_id = fdc_id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("invalid id".into()))?;

    let food = state.provider.get_food_by_id(fdc_id).await?;
    Ok(Json(food))
}
