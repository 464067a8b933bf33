mod dto;
pub mod handlers;

pub use dto::SearchRequest;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::search_routes()
}
