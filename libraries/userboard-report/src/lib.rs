//! Userboard Report
//!
//! Turns a reloaded [`UserFrame`](userboard_core::UserFrame) into Plotly
//! chart figures, a short interpretation per chart, and the HTML that shows
//! them.
//!
//! # Features
//!
//! - **Charts**: six figures over domains, names, companies and cities
//! - **Interpretations**: one sentence per chart, computed from the data
//! - **Page**: data table, summary metrics and every chart on one page
//! - **Export**: a standalone HTML document per chart
//!
//! # Example
//!
//! ```ignore
//! use userboard_report::{ChartId, Dashboard, Renderer};
//!
//! let dashboard = Dashboard::new("Users", "https://jsonplaceholder.typicode.com/users", frame, ChartId::ALL);
//! let renderer = Renderer::new()?;
//!
//! let page = renderer.render_page(&dashboard)?;
//! let export = renderer.render_chart_export(&dashboard, &dashboard.charts[0])?;
//! ```

mod charts;
mod error;
mod interpret;
mod page;

pub use charts::{build_chart, build_charts, Chart, ChartId};
pub use error::{ReportError, Result};
pub use page::{script_safe_json, Dashboard, Renderer};
