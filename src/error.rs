//! Error types for quakefeed
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A fetch can go wrong in exactly two ways a caller might want to tell
//! apart: the transport failed to produce a response body, or the body
//! arrived but did not conform to the feed schema. [`Error::kind`]
//! exposes that split without forcing callers to match every variant.

use thiserror::Error;

/// The main error type for quakefeed
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP layer failed before producing a response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The configured endpoint is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body was retrieved but does not match the feed schema
    #[error("Failed to decode feed: {message}")]
    Decode { message: String },

    /// The background fetch task ended before delivering a result
    #[error("Fetch task failed: {message}")]
    TaskFailed { message: String },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The network layer failed to produce a response body
    Transport,
    /// The response body did not conform to the feed schema
    Decode,
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a task failure error
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::TaskFailed {
            message: message.into(),
        }
    }

    /// Classify this error as transport-side or decode-side
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Decode { .. } => ErrorKind::Decode,
            _ => ErrorKind::Transport,
        }
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}

/// Result type alias for quakefeed
pub type Result<T> = std::result::Result<T, Error>;
