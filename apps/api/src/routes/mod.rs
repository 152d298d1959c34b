pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ranking API
        .route("/api/v1/rank", post(handlers::handle_rank))
        .route("/api/v1/rank/batch", post(handlers::handle_rank_batch))
        .with_state(state)
}
