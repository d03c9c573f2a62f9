//! # quakefeed
//!
//! Typed async client for the USGS significant-earthquakes GeoJSON feed.
//!
//! ## Features
//!
//! - **Typed schema model**: the feed decodes into immutable value
//!   structs with validated enums and fixed-length positional arrays
//! - **Pure decoder**: bytes in, `EarthquakeFeed` or a decode error out
//! - **One-shot background fetch**: the round trip runs on the tokio
//!   worker pool and delivers its single result through a oneshot
//!   channel to whichever context awaits it
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quakefeed::{FeedClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = FeedClient::new();
//!
//!     // Spawns the fetch; the handle resolves exactly once
//!     let feed = client.fetch().await?;
//!
//!     for feature in &feed.features {
//!         println!("{} (mag {})", feature.properties.title, feature.properties.mag);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! FeedClient::fetch ──spawn──▶ Transport::get ──bytes──▶ decode_feed
//!        │                                                    │
//!        ▼                                                    ▼
//!   FetchHandle ◀────────── oneshot channel ◀──── Ok(feed) | Err(error)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Feed schema model and decoder
pub mod feed;

/// One-shot fetch-decode pipeline
pub mod fetch;

/// Network transport seam
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use feed::{
    decode_feed, Alert, BoundingBox, Coordinates, EarthquakeFeed, Feature, Geometry, Properties,
    Status, Tsunami,
};
pub use fetch::{FeedClient, FeedClientConfig, FetchHandle, SIGNIFICANT_MONTH_URL};
pub use transport::{HttpTransport, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
