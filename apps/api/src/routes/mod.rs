pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::signal::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/topsecret", post(handlers::handle_top_secret))
        .route(
            "/topsecret_split",
            get(handlers::handle_get_top_secret_split),
        )
        .route(
            "/topsecret_split/:satellite_name",
            post(handlers::handle_top_secret_split),
        )
        .with_state(state)
}
