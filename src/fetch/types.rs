//! Fetch pipeline types
//!
//! Configuration for the feed client, and the handle through which a
//! background fetch delivers its single result.

use crate::error::{Error, Result};
use crate::feed::EarthquakeFeed;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::oneshot;

/// The USGS significant-earthquakes feed, past 30 days
pub const SIGNIFICANT_MONTH_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson";

/// Configuration for [`FeedClient`](super::FeedClient)
#[derive(Debug, Clone)]
pub struct FeedClientConfig {
    /// Feed endpoint URL
    pub endpoint: String,
    /// User agent string
    pub user_agent: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for FeedClientConfig {
    fn default() -> Self {
        Self {
            endpoint: SIGNIFICANT_MONTH_URL.to_string(),
            user_agent: format!("quakefeed/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl FeedClientConfig {
    /// Create a new config builder
    pub fn builder() -> FeedClientConfigBuilder {
        FeedClientConfigBuilder::default()
    }
}

/// Builder for [`FeedClientConfig`]
#[derive(Default)]
pub struct FeedClientConfigBuilder {
    config: FeedClientConfig,
}

impl FeedClientConfigBuilder {
    /// Override the feed endpoint
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the config
    pub fn build(self) -> FeedClientConfig {
        self.config
    }
}

/// Handle to an in-flight background fetch.
///
/// Resolves to the single result the background task sends over its
/// completion channel; the task that awaits the handle is the delivery
/// context. The result is delivered exactly once, and awaiting
/// consumes the handle.
#[derive(Debug)]
pub struct FetchHandle {
    rx: oneshot::Receiver<Result<EarthquakeFeed>>,
}

impl FetchHandle {
    pub(crate) fn new(rx: oneshot::Receiver<Result<EarthquakeFeed>>) -> Self {
        Self { rx }
    }
}

impl Future for FetchHandle {
    type Output = Result<EarthquakeFeed>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let rx = &mut self.get_mut().rx;
        Pin::new(rx).poll(cx).map(|delivered| match delivered {
            Ok(result) => result,
            // Sender dropped without completing: the background task
            // panicked or was torn down before it could report.
            Err(_) => Err(Error::task_failed(
                "background fetch ended before delivering a result",
            )),
        })
    }
}
