pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::lenses::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/lenses", get(handlers::handle_list_lenses))
        .route("/api/v1/lenses/generate", post(handlers::handle_generate))
        .route("/api/v1/project", get(handlers::handle_get_project))
        .route("/api/v1/view", get(handlers::handle_get_view))
        .route("/api/v1/view/lens", put(handlers::handle_select_lens))
        .with_state(state)
}
