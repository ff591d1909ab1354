//! Routes for the layout games catalog.

use axum::{Json, Router, routing::get};
use layoutquest_stages::games::{GameSummary, all_games};

use crate::state::AppState;

/// GET /
async fn list_games() -> Json<Vec<GameSummary>> {
    Json(all_games())
}

/// Returns the router for the games catalog.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_games))
}
