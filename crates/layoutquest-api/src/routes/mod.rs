//! Route modules organized by bounded context.

pub mod games;
pub mod guild;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router. Middleware layers are added by the
/// binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/guild", guild::router())
        .nest("/api/v1/games", games::router())
        .with_state(state)
}
