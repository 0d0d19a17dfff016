//! Project reconciliation.
//!
//! Turns raw gateway answers into domain results, and drives the
//! "read manifest, then patch the remote project" workflow.
//!
//! Fetch and delete are load-bearing: any failure is returned as an error.
//! Patching metadata is best-effort: a rejected patch or an empty manifest
//! is reported as `Ok(false)` so the caller's pipeline can carry on.

use std::path::Path;

use crate::bom::CycloneDxReader;
use crate::client::DtrackClient;
use crate::error::{DtrackError, Result};
use crate::models::Project;
use crate::traits::{ManifestReader, ProjectGateway};

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

/// Reconciles local project metadata with a Dependency-Track server.
///
/// Holds no state besides its collaborators, so a single instance can serve
/// any number of sequential or concurrent calls.
///
/// # Example
///
/// ```no_run
/// use dtrackapi::ProjectReconciler;
///
/// # async fn example() -> dtrackapi::Result<()> {
/// let reconciler = ProjectReconciler::from_env()?;
///
/// let project = reconciler.get_project("acme-app", "1.0").await?;
/// if !reconciler.update_project_info(&project, "target/bom.json").await? {
///     eprintln!("project metadata left unchanged");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectReconciler<G, R> {
    gateway: G,
    reader: R,
}

impl ProjectReconciler<DtrackClient, CycloneDxReader> {
    /// Create a reconciler talking to the server configured in the
    /// environment, reading CycloneDX JSON manifests.
    ///
    /// # Errors
    ///
    /// Returns an error if `DTRACK_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(DtrackClient::from_env()?, CycloneDxReader::new()))
    }
}

impl<G, R> ProjectReconciler<G, R>
where
    G: ProjectGateway,
    R: ManifestReader,
{
    /// Create a reconciler from its collaborators.
    pub fn new(gateway: G, reader: R) -> Self {
        Self { gateway, reader }
    }

    /// The gateway used for remote calls.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch a project by name and version.
    ///
    /// # Errors
    ///
    /// - [`DtrackError::NotFound`] on a 404, or a 200 without a body
    /// - [`DtrackError::FetchFailed`] on any other status
    /// - [`DtrackError::TransportFailure`] if the server could not be reached
    pub async fn get_project(&self, name: &str, version: &str) -> Result<Project> {
        let response = self
            .gateway
            .fetch(name, version)
            .await
            .map_err(|e| DtrackError::transport("Failed to fetch project", e))?;

        let not_found = || DtrackError::NotFound {
            name: name.to_string(),
            version: version.to_string(),
        };

        match response.status {
            STATUS_OK => response.into_body().ok_or_else(not_found),
            STATUS_NOT_FOUND => Err(not_found()),
            status_code => {
                tracing::error!(
                    name = %name,
                    version = %version,
                    status = status_code,
                    status_text = %response.status_text,
                    "Failed to find project due to error from server"
                );
                Err(DtrackError::FetchFailed {
                    name: name.to_string(),
                    version: version.to_string(),
                    status_code,
                    status_text: response.status_text,
                })
            }
        }
    }

    /// Patch the project with metadata read from the manifest at
    /// `manifest_path`.
    ///
    /// Returns `Ok(true)` if the server accepted the patch. Returns
    /// `Ok(false)` without contacting the server if the manifest yields no
    /// metadata, and `Ok(false)` if the server rejected the patch.
    ///
    /// # Errors
    ///
    /// Returns [`DtrackError::TransportFailure`] if the server could not be
    /// reached.
    pub async fn update_project_info(
        &self,
        project: &Project,
        manifest_path: impl AsRef<Path>,
    ) -> Result<bool> {
        let manifest_path = manifest_path.as_ref();

        let Some(info) = self.reader.parse(manifest_path) else {
            tracing::warn!(
                manifest = %manifest_path.display(),
                "Could not create project info from BOM"
            );
            return Ok(false);
        };

        let response = self
            .gateway
            .patch(&project.id, &info)
            .await
            .map_err(|e| {
                tracing::error!(
                    project = %project.id,
                    error = %e,
                    "Failed to update project info"
                );
                DtrackError::transport("Failed to update project info", e)
            })?;

        let updated = response.is_success();
        if !updated {
            tracing::debug!(
                project = %project.id,
                status = response.status,
                status_text = %response.status_text,
                "Server rejected project info update"
            );
        }

        Ok(updated)
    }

    /// Delete a project.
    ///
    /// Returns whether the server reported success.
    ///
    /// # Errors
    ///
    /// Returns [`DtrackError::TransportFailure`] if the server could not be
    /// reached.
    pub async fn delete_project(&self, project: &Project) -> Result<bool> {
        tracing::debug!(
            name = %project.name,
            version = %project.version,
            "Deleting project"
        );

        let response = self.gateway.delete(project).await.map_err(|e| {
            tracing::error!(project = %project.id, error = %e, "Failed to delete project");
            DtrackError::transport("Failed to delete project", e)
        })?;

        Ok(response.is_success())
    }
}
