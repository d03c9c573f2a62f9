//! Fetch-decode pipeline
//!
//! One-shot retrieval of the feed document.
//!
//! # Overview
//!
//! [`FeedClient::fetch`] spawns the GET-and-decode round trip onto the
//! tokio worker pool and returns a [`FetchHandle`] immediately; the
//! background task completes a oneshot channel with the single result,
//! and whichever context awaits the handle is the delivery context.
//! There is no retry, no caching, and no cancellation: every call is a
//! fresh round trip that completes exactly once, with the decoded feed
//! or an error.

mod client;
mod types;

pub use client::FeedClient;
pub use types::{FeedClientConfig, FeedClientConfigBuilder, FetchHandle, SIGNIFICANT_MONTH_URL};
