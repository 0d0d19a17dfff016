//! Error types for Dependency-Track operations.

use thiserror::Error;

/// A network-level fault raised while talking to the server.
///
/// Server-returned error statuses are not transport faults; they arrive as
/// ordinary [`Response`](crate::Response) values.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL could not be built for the request.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A success response carried a body that could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during Dependency-Track operations.
#[derive(Debug, Error)]
pub enum DtrackError {
    /// Configuration is missing or incomplete.
    #[error("Dependency-Track configuration required: {0}")]
    ConfigMissing(String),

    /// The requested project does not exist on the server.
    #[error("Requested project not found: {name}-{version}")]
    NotFound { name: String, version: String },

    /// The server answered a fetch with an unexpected status.
    #[error("Failed to fetch project from server: {name}-{version} ({status_code} {status_text})")]
    FetchFailed {
        name: String,
        version: String,
        status_code: u16,
        status_text: String,
    },

    /// The server could not be reached.
    #[error("{operation}: {source}")]
    TransportFailure {
        operation: &'static str,
        #[source]
        source: TransportError,
    },
}

impl DtrackError {
    /// Wrap a transport fault with the operation that was in flight.
    pub(crate) fn transport(operation: &'static str, source: TransportError) -> Self {
        Self::TransportFailure { operation, source }
    }

    /// Returns true if this error means the project does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for Dependency-Track operations.
pub type Result<T> = core::result::Result<T, DtrackError>;
