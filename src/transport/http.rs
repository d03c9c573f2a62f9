//! reqwest-backed transport

use super::Transport;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP transport backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given user agent and optional
    /// timeout. `None` leaves the client on reqwest's default.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        debug!("GET {} succeeded: {} bytes", url, bytes.len());
        Ok(bytes.to_vec())
    }
}
