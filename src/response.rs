//! Response envelope for Dependency-Track API calls.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// The outcome of one remote call.
///
/// Carries the numeric status, the status text, and the decoded body if the
/// server sent one. Success is derived from the status alone; a successful
/// response may still have no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable status text.
    pub status_text: String,
    /// Decoded body, if any.
    pub body: Option<T>,
}

impl<T> Response<T> {
    /// Create a response with the canonical status text for `status`.
    #[must_use]
    pub fn new(status: u16, body: Option<T>) -> Self {
        Self {
            status,
            status_text: status_text(status),
            body,
        }
    }

    /// Create a response without a body.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self::new(status, None)
    }

    /// Returns true for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Take the body, leaving the status information behind.
    #[must_use]
    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Read an HTTP response and decode its body.
    ///
    /// Only success responses with a non-blank body are decoded. Error
    /// bodies are discarded, and a JSON `null` body counts as absent.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the body cannot be read, or if a
    /// non-blank success body is not valid JSON for `T`.
    pub(crate) async fn from_http(
        response: reqwest::Response,
    ) -> core::result::Result<Self, TransportError> {
        let status = response.status().as_u16();
        let mut envelope = Self::empty(status);

        if !envelope.is_success() {
            return Ok(envelope);
        }

        let text = response.text().await?;
        if !text.trim().is_empty() {
            // A literal `null` decodes to no body.
            envelope.body = serde_json::from_str::<Option<T>>(&text)?;
        }

        Ok(envelope)
    }
}

impl Response<()> {
    /// Read an HTTP response, ignoring whatever body it carries.
    pub(crate) fn discard_body(response: &reqwest::Response) -> Self {
        Self::empty(response.status().as_u16())
    }
}

/// Canonical reason phrase for a status code, or `HTTP <code>`.
fn status_text(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range_boundaries() {
        assert!(!Response::<()>::empty(199).is_success());
        assert!(Response::<()>::empty(200).is_success());
        assert!(Response::<()>::empty(204).is_success());
        assert!(Response::<()>::empty(299).is_success());
        assert!(!Response::<()>::empty(300).is_success());
        assert!(!Response::<()>::empty(404).is_success());
    }

    #[test]
    fn test_success_is_independent_of_body() {
        let with_body = Response::new(500, Some("oops"));
        assert!(!with_body.is_success());

        let without_body = Response::<&str>::empty(204);
        assert!(without_body.is_success());
        assert!(without_body.body.is_none());
    }

    #[test]
    fn test_into_body_drops_status() {
        assert_eq!(Response::new(200, Some(7)).into_body(), Some(7));
        assert_eq!(Response::<u8>::empty(200).into_body(), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Response::<()>::empty(404).status_text, "Not Found");
        assert_eq!(Response::<()>::empty(500).status_text, "Internal Server Error");
        assert_eq!(Response::<()>::empty(599).status_text, "HTTP 599");
    }
}
