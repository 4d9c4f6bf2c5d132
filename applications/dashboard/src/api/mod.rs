/// HTTP routes
pub mod dashboard;
pub mod health;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/charts/:file", get(dashboard::export_chart))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
