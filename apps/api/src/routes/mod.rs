pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::retrieval::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/find-verses", post(handlers::handle_find_verses))
        .with_state(state)
}
