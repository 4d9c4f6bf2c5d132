/// Dashboard page and chart export routes
use crate::error::{DashboardError, Result};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use userboard_report::ChartId;

/// GET / - Rerun the pipeline and render the dashboard
///
/// A network failure renders the failure page instead, with 502.
pub async fn index(State(state): State<AppState>) -> Result<Response> {
    match state.refresh().await {
        Ok(dashboard) => Ok(Html(state.renderer.render_page(&dashboard)?).into_response()),
        Err(DashboardError::Fetch(err)) => {
            tracing::warn!(error = %err, "Users fetch failed, showing failure page");
            let page = state.renderer.render_failure(
                state.pipeline.title(),
                state.pipeline.source_url(),
                &err.to_string(),
            )?;
            Ok((StatusCode::BAD_GATEWAY, Html(page)).into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /charts/:file - Standalone HTML export of one chart
///
/// `file` is `<chart-id>.html`. Served from the latest run.
pub async fn export_chart(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response> {
    let id: ChartId = file
        .parse()
        .map_err(|_| DashboardError::NotFound(format!("chart {}", file)))?;

    let dashboard = state.current().await?;
    let chart = dashboard
        .chart(id)
        .ok_or_else(|| DashboardError::NotFound(format!("chart {} is not enabled", id)))?;

    let body = state.renderer.render_chart_export(&dashboard, chart)?;
    let disposition = format!("attachment; filename=\"{}\"", id.export_file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
