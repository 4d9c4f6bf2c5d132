/// Shared application state
use crate::error::Result;
use crate::pipeline::Pipeline;
use std::sync::Arc;
use tokio::sync::Mutex;
use userboard_report::{Dashboard, Renderer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub renderer: Arc<Renderer>,
    /// Latest successful run. The lock is held for the whole run, so two
    /// page loads never overwrite the table at the same time.
    latest: Arc<Mutex<Option<Arc<Dashboard>>>>,
}

impl AppState {
    pub fn new(pipeline: Arc<Pipeline>, renderer: Arc<Renderer>) -> Self {
        Self {
            pipeline,
            renderer,
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Run the pipeline and remember the result.
    pub async fn refresh(&self) -> Result<Arc<Dashboard>> {
        let mut latest = self.latest.lock().await;
        let dashboard = Arc::new(self.pipeline.run().await?);
        *latest = Some(Arc::clone(&dashboard));
        Ok(dashboard)
    }

    /// Row count of the latest successful run, if any.
    pub async fn last_row_count(&self) -> Option<usize> {
        self.latest.lock().await.as_ref().map(|d| d.frame.len())
    }

    /// The latest run, running the pipeline first if there is none yet.
    pub async fn current(&self) -> Result<Arc<Dashboard>> {
        {
            let latest = self.latest.lock().await;
            if let Some(dashboard) = latest.as_ref() {
                return Ok(Arc::clone(dashboard));
            }
        }
        self.refresh().await
    }
}
