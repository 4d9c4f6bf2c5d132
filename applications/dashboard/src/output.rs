//! Writing rendered documents to disk.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;
use userboard_report::{Chart, Dashboard, Renderer};

/// Directory under the output root holding the chart exports.
pub const CHARTS_DIR: &str = "charts";

/// Write `index.html` and one export per chart under `dir`.
///
/// Returns the path of the page.
pub async fn write_bundle(renderer: &Renderer, dashboard: &Dashboard, dir: &Path) -> Result<PathBuf> {
    let charts_dir = dir.join(CHARTS_DIR);
    tokio::fs::create_dir_all(&charts_dir).await?;

    for chart in &dashboard.charts {
        write_chart(renderer, dashboard, chart, &charts_dir.join(chart.id.export_file_name()))
            .await?;
    }

    let index = dir.join("index.html");
    tokio::fs::write(&index, renderer.render_page(dashboard)?).await?;

    info!(path = %index.display(), charts = dashboard.charts.len(), "Dashboard written");
    Ok(index)
}

/// Write the standalone export of one chart to `path`.
pub async fn write_chart(
    renderer: &Renderer,
    dashboard: &Dashboard,
    chart: &Chart,
    path: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, renderer.render_chart_export(dashboard, chart)?).await?;
    Ok(())
}

/// Write the failure page as `index.html` under `dir`.
pub async fn write_failure(
    renderer: &Renderer,
    title: &str,
    source_url: &str,
    message: &str,
    dir: &Path,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;

    let index = dir.join("index.html");
    tokio::fs::write(&index, renderer.render_failure(title, source_url, message)?).await?;
    Ok(index)
}
