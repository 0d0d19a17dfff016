//! Dependency-Track API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Status codes are not interpreted here; every answer from the server is
//! handed back as a [`reqwest::Response`], and only network-level faults
//! become errors.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{DtrackError, Result, TransportError};

const DEFAULT_API_URL: &str = "http://localhost:8081";
const USER_AGENT: &str = concat!("dtrackapi/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "X-Api-Key";

/// Low-level Dependency-Track API client.
///
/// Handles authentication and HTTP requests. Project operations are exposed
/// through the [`ProjectGateway`](crate::ProjectGateway) implementation.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use dtrackapi::DtrackClient;
///
/// # fn example() -> dtrackapi::Result<()> {
/// // Create from environment variables
/// let client = DtrackClient::from_env()?;
///
/// // Or configure manually
/// let client = DtrackClient::new("your-api-key", "https://dtrack.example.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DtrackClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for DtrackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DtrackClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl DtrackClient {
    /// Create a client from environment variables.
    ///
    /// Uses `DTRACK_API_KEY` for authentication and optionally
    /// `DTRACK_API_URL` for the base URL (defaults to `http://localhost:8081`).
    ///
    /// # Errors
    ///
    /// Returns an error if `DTRACK_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("DTRACK_API_KEY").map_err(|_| {
            DtrackError::ConfigMissing("DTRACK_API_KEY environment variable not set".to_string())
        })?;

        let base_url =
            env::var("DTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Dependency-Track API key
    /// * `base_url` - Server root (e.g., `https://dtrack.example.com`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str).map_err(|e| {
            DtrackError::ConfigMissing(format!("invalid base URL '{base_url_str}': {e}"))
        })?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| DtrackError::ConfigMissing(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> core::result::Result<Response, TransportError> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "GET completed");
        Ok(response)
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> core::result::Result<Response, TransportError> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .patch(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "PATCH completed");
        Ok(response)
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete_resource(
        &self,
        path: &str,
    ) -> core::result::Result<Response, TransportError> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "DELETE completed");
        Ok(response)
    }
}
