//! Manifest reader trait.

use std::path::Path;

use crate::models::ProjectInfo;

/// Extract project metadata from a local bill-of-materials file.
///
/// Returning `None` is not an error: a manifest may simply carry no usable
/// metadata.
pub trait ManifestReader: Send + Sync {
    /// Parse the manifest at `path`.
    fn parse(&self, path: &Path) -> Option<ProjectInfo>;
}
