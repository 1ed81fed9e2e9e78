//! Adapter errors.

use std::error::Error as StdError;
use thiserror::Error;

/// The upstream node could not be reached at startup.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),

    #[error("failed to build HTTP client: {}", cause_chain(.0))]
    Client(reqwest::Error),

    #[error("handshake with upstream node failed: {0}")]
    Handshake(RemoteCallError),
}

/// A single remote call failed.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// Built through [`RemoteCallError::transport`] so the endpoint URL is
    /// stripped first.
    #[error("request failed: {}", cause_chain(.0))]
    Transport(reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no result returned for {method}")]
    MissingResult { method: &'static str },
}

impl RemoteCallError {
    /// Wrap a transport failure, dropping the request URL it carries.
    pub fn transport(error: reqwest::Error) -> Self {
        RemoteCallError::Transport(error.without_url())
    }
}

/// Render an error and its sources as one `a: b: c` line.
fn cause_chain(error: &reqwest::Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Result type for remote calls.
pub type Result<T> = std::result::Result<T, RemoteCallError>;
