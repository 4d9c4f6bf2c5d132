//! Error types for report rendering.

use thiserror::Error;

/// Errors raised while building or rendering the dashboard.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A chart id that is not one of the known charts
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// A built-in template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Rendering a template failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// A figure could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
