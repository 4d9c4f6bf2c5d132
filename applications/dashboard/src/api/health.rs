/// Liveness route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub source_url: String,
    /// `None` until the first successful run.
    pub last_row_count: Option<usize>,
}

/// GET /health
///
/// Does not run the pipeline. Waits for an in-flight run to finish.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        source_url: state.pipeline.source_url().to_string(),
        last_row_count: state.last_row_count().await,
    })
}
