//! Users endpoint client.

use crate::error::{ClientError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use userboard_core::{parse_users, User};

/// Deadline for the whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Where to fetch users from and how long to wait.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full endpoint URL (e.g., "https://jsonplaceholder.typicode.com/users")
    pub url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the upstream users endpoint.
pub struct UsersClient {
    http: Client,
    url: String,
    timeout: Duration,
}

impl UsersClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("Userboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            url: config.url,
            timeout: config.timeout,
        })
    }

    /// The endpoint this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode every user record.
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        debug!(url = %self.url, "Fetching users");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else if e.is_connect() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Users endpoint returned an error");
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else {
                ClientError::Request(e)
            }
        })?;

        let users = parse_users(&body).map_err(|e| ClientError::ParseError(e.to_string()))?;

        info!(count = users.len(), "Fetched users");

        Ok(users)
    }
}
