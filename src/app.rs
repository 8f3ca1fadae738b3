use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .route("/api/meals", get(handlers::meals))
        .route("/view/analyze", post(handlers::view_analyze))
        .with_state(state)
}
