use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

use super::dto::{SaveQueryRequest, SaveQueryResponse, SavedQueryResponse};
use super::repo::{self, DEFAULT_LIST_LIMIT};

pub fn saved_routes() -> Router<AppState> {
    Router::new()
        .route("/saved", get(list_saved).post(save_query))
        .route("/saved/:id", get(get_saved))
}

#[instrument(skip(state, payload))]
pub async fn save_query(
    State(state): State<AppState>,
    payload: Result<Json<SaveQueryRequest>, JsonRejection>,
) -> AppResult<Json<SaveQueryResponse>> {
    let db = state.require_db()?;
    let Json(body) = payload?;
    let Some(new) = body.into_new() else {
        warn!("save without query");
        return Err(AppError::BadRequest("Missing query".into()));
    };

    let row = repo::save_query(db, &new).await?;
    info!(id = row.id, query = %new.query, results = new.results.len(), "query saved");

    Ok(Json(SaveQueryResponse {
        ok: true,
        id: row.id,
        created_at: row.created_at,
    }))
}

#[instrument(skip(state))]
pub async fn list_saved(State(state): State<AppState>) -> AppResult<Json<Vec<SavedQueryResponse>>> {
    let db = state.require_db()?;
    let rows = repo::list_saved(db, DEFAULT_LIST_LIMIT).await?;
    Ok(Json(rows.into_iter().map(SavedQueryResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SavedQueryResponse>> {
    let Some(id) = parse_id(&id) else {
        warn!(%id, "invalid saved query id");
        return Err(AppError::BadRequest("invalid id".into()));
    };
    let db = state.require_db()?;

    let row = repo::get_saved_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("not found".into()))?;
    Ok(Json(row.into()))
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
