/// Dashboard error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use userboard_client::ClientError;
use userboard_report::ReportError;
use userboard_storage::StorageError;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Network/HTTP failure while fetching users. The only failure shown to
    /// the viewer as a page.
    #[error("{0}")]
    Fetch(ClientError),

    /// Any other client failure (bad body, bad URL)
    #[error("Client error: {0}")]
    Client(ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ClientError> for DashboardError {
    fn from(err: ClientError) -> Self {
        if err.is_network() {
            DashboardError::Fetch(err)
        } else {
            DashboardError::Client(err)
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            DashboardError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DashboardError::Fetch(ref e) => {
                tracing::error!("Fetch error: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            DashboardError::Client(ref e) => {
                tracing::error!("Client error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Invalid upstream response".to_string(),
                )
            }
            DashboardError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            DashboardError::Report(ref e) => {
                tracing::error!("Report error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Render error".to_string(),
                )
            }
            DashboardError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            DashboardError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
