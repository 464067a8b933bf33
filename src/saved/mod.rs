mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub use dto::{SaveQueryRequest, SaveQueryResponse, SavedQueryResponse};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::saved_routes()
}
