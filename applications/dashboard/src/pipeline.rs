//! Fetch, store, reload, derive, chart.

use crate::config::DashboardConfig;
use crate::error::Result;
use sqlx::SqlitePool;
use tracing::info;
use userboard_client::{ClientConfig, UsersClient};
use userboard_core::UserFrame;
use userboard_report::{ChartId, Dashboard};
use userboard_storage::users;

/// One linear run of the dashboard.
///
/// Every step awaits the previous one; a failed fetch stops the run before
/// the table is touched.
pub struct Pipeline {
    client: UsersClient,
    pool: SqlitePool,
    title: String,
    charts: Vec<ChartId>,
}

impl Pipeline {
    pub fn new(
        client: UsersClient,
        pool: SqlitePool,
        title: impl Into<String>,
        charts: Vec<ChartId>,
    ) -> Self {
        Self {
            client,
            pool,
            title: title.into(),
            charts,
        }
    }

    /// Build the client and open the store described by `config`.
    pub async fn from_config(config: &DashboardConfig) -> Result<Self> {
        let client = UsersClient::new(
            ClientConfig::new(&config.source.url).with_timeout(config.source.timeout()),
        )?;
        let pool = userboard_storage::create_pool(&config.storage.database_url).await?;

        Ok(Self::new(
            client,
            pool,
            &config.report.title,
            config.report.charts.clone(),
        ))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_url(&self) -> &str {
        self.client.url()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run(&self) -> Result<Dashboard> {
        info!(url = %self.client.url(), "Connecting to the users API");
        let fetched = self.client.fetch_users().await?;

        let stored = users::replace_all(&self.pool, &fetched).await?;
        let rows = users::get_all(&self.pool).await?;
        let frame = UserFrame::from_rows(rows);

        let dashboard = Dashboard::new(&self.title, self.client.url(), frame, &self.charts);

        info!(
            fetched = fetched.len(),
            stored,
            charts = dashboard.charts.len(),
            "Dashboard built"
        );

        Ok(dashboard)
    }
}
