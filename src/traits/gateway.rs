//! Gateway trait for the remote project endpoint.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{Project, ProjectInfo};
use crate::response::Response;

/// Raw remote operations on a project.
///
/// Implementations pass the server's answer through untouched: status codes
/// are interpreted by the caller. Only faults that prevent getting an answer
/// at all are returned as errors.
///
/// # Example
///
/// ```ignore
/// use dtrackapi::{DtrackClient, ProjectGateway};
///
/// let client = DtrackClient::from_env()?;
/// let response = client.fetch("acme-app", "1.0").await?;
/// if response.is_success() {
///     println!("{:?}", response.body);
/// }
/// ```
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Look up a project by name and version.
    async fn fetch(&self, name: &str, version: &str)
        -> Result<Response<Project>, TransportError>;

    /// Apply manifest metadata to the project with the given identifier.
    async fn patch(&self, id: &str, info: &ProjectInfo) -> Result<Response<()>, TransportError>;

    /// Delete a project.
    async fn delete(&self, project: &Project) -> Result<Response<()>, TransportError>;
}
