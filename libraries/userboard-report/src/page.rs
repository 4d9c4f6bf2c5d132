//! Dashboard page and standalone chart exports.

use crate::charts::{build_charts, Chart, ChartId};
use crate::error::{ReportError, Result};
use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;
use userboard_core::{DerivedUser, Summary, UserFrame};

const PAGE_TEMPLATE: &str = include_str!("../templates/page.hbs");
const EXPORT_TEMPLATE: &str = include_str!("../templates/export.hbs");
const FAILURE_TEMPLATE: &str = include_str!("../templates/failure.hbs");

/// Plotly bundle loaded by every rendered document.
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub source_url: String,
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub frame: UserFrame,
    pub charts: Vec<Chart>,
}

impl Dashboard {
    /// Compute the summary and the requested charts for `frame`.
    pub fn new(
        title: impl Into<String>,
        source_url: impl Into<String>,
        frame: UserFrame,
        charts: &[ChartId],
    ) -> Self {
        let charts = build_charts(charts, &frame);
        Self {
            title: title.into(),
            source_url: source_url.into(),
            generated_at: Utc::now(),
            summary: frame.summary(),
            frame,
            charts,
        }
    }

    /// Find a chart of this run.
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}

/// Serialize a value for embedding inside a `<script>` element.
///
/// Every `<` is escaped as `\u003c`, so no string in the data can close
/// the element early.
pub fn script_safe_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

#[derive(Serialize)]
struct ChartView<'a> {
    slug: &'static str,
    heading: &'a str,
    title: &'a str,
    interpretation: &'a str,
    figure_json: String,
    export_href: String,
}

impl<'a> ChartView<'a> {
    fn new(chart: &'a Chart) -> Result<Self> {
        Ok(Self {
            slug: chart.id.slug(),
            heading: &chart.heading,
            title: &chart.title,
            interpretation: &chart.interpretation,
            figure_json: script_safe_json(&chart.figure)?,
            export_href: format!("charts/{}", chart.id.export_file_name()),
        })
    }
}

#[derive(Serialize)]
struct MetricView {
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct PageView<'a> {
    title: &'a str,
    source_url: &'a str,
    generated_at: String,
    plotly_js: &'static str,
    row_count: usize,
    rows: &'a [DerivedUser],
    metrics: Vec<MetricView>,
    charts: Vec<ChartView<'a>>,
}

#[derive(Serialize)]
struct ExportView<'a> {
    title: &'a str,
    source_url: &'a str,
    generated_at: String,
    plotly_js: &'static str,
    chart: ChartView<'a>,
}

#[derive(Serialize)]
struct FailureView<'a> {
    title: &'a str,
    source_url: &'a str,
    message: &'a str,
}

fn metrics(summary: &Summary) -> Vec<MetricView> {
    vec![
        MetricView {
            label: "Users",
            value: summary.total_users.to_string(),
        },
        MetricView {
            label: "Email domains",
            value: summary.distinct_domains.to_string(),
        },
        MetricView {
            label: "Companies",
            value: summary.distinct_companies.to_string(),
        },
        MetricView {
            label: "Mean name length",
            value: format!("{:.1}", summary.mean_name_length),
        },
        MetricView {
            label: "Mean username length",
            value: format!("{:.1}", summary.mean_username_length),
        },
    ]
}

/// HTML renderer over the built-in templates. Every interpolated value is
/// HTML-escaped.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string("page", PAGE_TEMPLATE)?;
        handlebars.register_template_string("export", EXPORT_TEMPLATE)?;
        handlebars.register_template_string("failure", FAILURE_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// The full dashboard: table, metrics and every chart.
    pub fn render_page(&self, dashboard: &Dashboard) -> Result<String> {
        let view = PageView {
            title: &dashboard.title,
            source_url: &dashboard.source_url,
            generated_at: dashboard.generated_at.to_rfc3339(),
            plotly_js: PLOTLY_JS,
            row_count: dashboard.frame.len(),
            rows: dashboard.frame.rows(),
            metrics: metrics(&dashboard.summary),
            charts: dashboard
                .charts
                .iter()
                .map(ChartView::new)
                .collect::<Result<Vec<_>>>()?,
        };

        debug!(charts = view.charts.len(), rows = view.row_count, "Rendering dashboard page");
        Ok(self.handlebars.render("page", &view)?)
    }

    /// A standalone document holding only `chart`.
    pub fn render_chart_export(&self, dashboard: &Dashboard, chart: &Chart) -> Result<String> {
        let view = ExportView {
            title: &dashboard.title,
            source_url: &dashboard.source_url,
            generated_at: dashboard.generated_at.to_rfc3339(),
            plotly_js: PLOTLY_JS,
            chart: ChartView::new(chart)?,
        };

        Ok(self.handlebars.render("export", &view)?)
    }

    /// Look up `id` in `dashboard` and export it.
    pub fn render_export_by_id(&self, dashboard: &Dashboard, id: ChartId) -> Result<String> {
        let chart = dashboard
            .chart(id)
            .ok_or_else(|| ReportError::UnknownChart(id.to_string()))?;
        self.render_chart_export(dashboard, chart)
    }

    /// The page shown instead of the dashboard when fetching fails.
    pub fn render_failure(&self, title: &str, source_url: &str, message: &str) -> Result<String> {
        let view = FailureView {
            title,
            source_url,
            message,
        };

        Ok(self.handlebars.render("failure", &view)?)
    }
}
