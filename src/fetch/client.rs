//! Feed client
//!
//! GET the endpoint, decode the body, report the outcome.
//! [`FeedClient::fetch_feed`] runs the round trip inline on the calling
//! task; [`FeedClient::fetch`] moves it onto the tokio worker pool and
//! hands the result back through a oneshot channel.

use super::types::{FeedClientConfig, FetchHandle};
use crate::error::Result;
use crate::feed::{decode_feed, EarthquakeFeed};
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

/// Client for the earthquake feed
#[derive(Clone)]
pub struct FeedClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
}

impl FeedClient {
    /// Create a client for the fixed USGS endpoint with default settings
    pub fn new() -> Self {
        Self::with_config(FeedClientConfig::default()).expect("default configuration is valid")
    }

    /// Create a client with a custom configuration.
    ///
    /// Fails if the configured endpoint is not a valid URL.
    pub fn with_config(config: FeedClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout);
        Self::with_transport(Arc::new(transport), &config)
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: &FeedClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        Ok(Self {
            transport,
            endpoint,
        })
    }

    /// The endpoint this client fetches from
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the feed on the current task
    pub async fn fetch_feed(&self) -> Result<EarthquakeFeed> {
        run_fetch(self.transport.as_ref(), &self.endpoint).await
    }

    /// Start a background fetch and return a handle to its result.
    ///
    /// The round trip and decode run on the tokio worker pool; this
    /// call returns immediately. The handle resolves exactly once with
    /// the feed or the error, on whichever context awaits it. Every
    /// call performs a fresh round trip; failures are logged before
    /// they are forwarded.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch(&self) -> FetchHandle {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            let result = run_fetch(transport.as_ref(), &endpoint).await;
            if let Err(ref error) = result {
                warn!("Feed fetch failed: {error}");
            }
            // The receiver may already be gone; nothing left to notify
            let _ = tx.send(result);
        });

        FetchHandle::new(rx)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

async fn run_fetch(transport: &dyn Transport, endpoint: &Url) -> Result<EarthquakeFeed> {
    debug!("Fetching earthquake feed from {endpoint}");
    let bytes = transport.get(endpoint.as_str()).await?;
    let feed = decode_feed(&bytes)?;
    debug!("Decoded {} features", feed.features.len());
    Ok(feed)
}
