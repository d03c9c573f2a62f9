//! Network transport
//!
//! The seam between the fetch pipeline and the network: one primitive,
//! GET a URL and hand back the response body bytes or a transport
//! error. The production implementation wraps reqwest; tests substitute
//! their own.

mod http;

pub use http::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;

/// A one-shot byte transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the response body bytes.
    ///
    /// A non-2xx response is an error, not a body.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
