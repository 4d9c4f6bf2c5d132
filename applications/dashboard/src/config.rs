/// Dashboard configuration
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use userboard_report::ChartId;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "userboard.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default = "default_source")]
    pub source: SourceSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_output")]
    pub output: OutputSettings,

    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_report")]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    #[serde(default = "default_source_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportSettings {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_charts")]
    pub charts: Vec<ChartId>,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DashboardConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `userboard.toml` is read when
    /// present. `USERBOARD_<SECTION>__<KEY>` variables override both
    /// (e.g. `USERBOARD_SOURCE__TIMEOUT_SECS=5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("USERBOARD")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("report.charts")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = &self.source.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "source.url must be an http(s) URL, got {:?}",
                url
            )));
        }

        if self.source.timeout_secs == 0 {
            return Err(DashboardError::Config(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.storage.database_url.is_empty() {
            return Err(DashboardError::Config(
                "storage.database_url is required (set USERBOARD_STORAGE__DATABASE_URL)"
                    .to_string(),
            ));
        }

        if self.report.charts.is_empty() {
            return Err(DashboardError::Config(
                "report.charts must name at least one chart".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_source() -> SourceSettings {
    SourceSettings {
        url: default_source_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_source_url() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://users.db".to_string()
}

fn default_output() -> OutputSettings {
    OutputSettings {
        dir: default_output_dir(),
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./dashboard")
}

fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_report() -> ReportSettings {
    ReportSettings {
        title: default_title(),
        charts: default_charts(),
    }
}

fn default_title() -> String {
    "Users dashboard".to_string()
}

fn default_charts() -> Vec<ChartId> {
    ChartId::ALL.to_vec()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            storage: default_storage(),
            output: default_output(),
            server: default_server(),
            report: default_report(),
        }
    }
}
