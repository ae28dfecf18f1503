//! HTTP client for pinging URLs

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::HttpConfig;

#[derive(Debug, Error)]
pub enum PingError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

pub type Result<T> = std::result::Result<T, PingError>;

/// Client settings for a single handler
#[derive(Debug, Clone)]
pub struct PingSettings {
    /// Whole-request timeout; `None` waits forever
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub system_proxy: bool,
}

impl PingSettings {
    /// Settings with the configured timeout applied
    pub fn bounded(http: &HttpConfig) -> Self {
        Self {
            timeout: Some(http.timeout.as_duration()),
            user_agent: http.user_agent.clone(),
            system_proxy: http.system_proxy,
        }
    }

    /// Settings with no timeout at all
    pub fn unbounded(http: &HttpConfig) -> Self {
        Self {
            timeout: None,
            ..Self::bounded(http)
        }
    }
}

/// Issues single GET requests and reports the status code
#[derive(Debug, Clone)]
pub struct PingClient {
    client: Client,
    settings: PingSettings,
}

impl PingClient {
    pub fn new(settings: PingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&settings.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        if !settings.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| PingError::ClientBuild(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &PingSettings {
        &self.settings
    }

    /// Send one GET and return the final status code (redirects followed)
    pub async fn status(&self, url: &str) -> Result<u16> {
        debug!(url, timeout = ?self.settings.timeout, "Sending GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                PingError::Timeout
            } else if e.is_builder() {
                PingError::InvalidUrl(e.to_string())
            } else if e.is_connect() {
                PingError::Connect(e.to_string())
            } else {
                PingError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        debug!(url, status, "Received response");

        Ok(status)
    }
}
