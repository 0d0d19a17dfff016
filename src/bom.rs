//! CycloneDX bill-of-materials reader.
//!
//! Extracts [`ProjectInfo`] from the `metadata.component` section of a
//! CycloneDX JSON document.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::ProjectInfo;
use crate::traits::ManifestReader;

/// Reads project metadata from CycloneDX JSON BOMs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycloneDxReader;

impl CycloneDxReader {
    pub fn new() -> Self {
        Self
    }

    /// Extract project metadata from BOM text.
    ///
    /// Returns `None` when the text is not a CycloneDX JSON document or
    /// describes no metadata component.
    pub fn parse_str(&self, content: &str) -> Option<ProjectInfo> {
        let bom: Bom = match serde_json::from_str(content) {
            Ok(bom) => bom,
            Err(e) => {
                tracing::debug!(error = %e, "BOM is not valid CycloneDX JSON");
                return None;
            }
        };

        let info = bom.metadata?.component?.into_project_info();
        if info.is_empty() {
            tracing::debug!("BOM metadata component carries no project information");
            return None;
        }
        Some(info)
    }
}

impl ManifestReader for CycloneDxReader {
    fn parse(&self, path: &Path) -> Option<ProjectInfo> {
        match fs::read_to_string(path) {
            Ok(content) => self.parse_str(&content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Failed to read BOM");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct Bom {
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    component: Option<Component>,
}

#[derive(Debug, Deserialize)]
struct Component {
    #[serde(rename = "type", default)]
    component_type: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    cpe: Option<String>,
    #[serde(default)]
    purl: Option<String>,
    #[serde(default)]
    swid: Option<Swid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Swid {
    #[serde(default)]
    tag_id: Option<String>,
}

impl Component {
    fn into_project_info(self) -> ProjectInfo {
        // Server classifiers are the CycloneDX component types, upper-cased.
        let classifier = self
            .component_type
            .map(|t| t.replace('-', "_").to_uppercase());

        ProjectInfo {
            classifier,
            author: self.author,
            publisher: self.publisher,
            group: self.group,
            description: self.description,
            cpe: self.cpe,
            purl: self.purl,
            swid_tag_id: self.swid.and_then(|s| s.tag_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BOM: &str = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.4",
        "version": 1,
        "metadata": {
            "timestamp": "2024-01-01T00:00:00Z",
            "component": {
                "type": "application",
                "bom-ref": "pkg:maven/io.acme/acme-app@1.0",
                "group": "io.acme",
                "name": "acme-app",
                "version": "1.0",
                "author": "Jane Doe",
                "publisher": "Acme Corp",
                "description": "Acme application",
                "cpe": "cpe:2.3:a:acme:acme-app:1.0:*:*:*:*:*:*:*",
                "purl": "pkg:maven/io.acme/acme-app@1.0",
                "swid": {"tagId": "swid-acme-app", "name": "acme-app"}
            }
        },
        "components": []
    }"#;

    #[test]
    fn test_parse_full_metadata_component() {
        let info = CycloneDxReader::new().parse_str(FULL_BOM).unwrap();

        assert_eq!(info.classifier.as_deref(), Some("APPLICATION"));
        assert_eq!(info.group.as_deref(), Some("io.acme"));
        assert_eq!(info.author.as_deref(), Some("Jane Doe"));
        assert_eq!(info.publisher.as_deref(), Some("Acme Corp"));
        assert_eq!(info.description.as_deref(), Some("Acme application"));
        assert_eq!(
            info.cpe.as_deref(),
            Some("cpe:2.3:a:acme:acme-app:1.0:*:*:*:*:*:*:*")
        );
        assert_eq!(info.purl.as_deref(), Some("pkg:maven/io.acme/acme-app@1.0"));
        assert_eq!(info.swid_tag_id.as_deref(), Some("swid-acme-app"));
    }

    #[test]
    fn test_hyphenated_type_becomes_classifier() {
        let bom = r#"{"metadata": {"component": {"type": "operating-system", "name": "os"}}}"#;
        let info = CycloneDxReader::new().parse_str(bom).unwrap();
        assert_eq!(info.classifier.as_deref(), Some("OPERATING_SYSTEM"));
    }

    #[test]
    fn test_minimal_bom_without_metadata_is_absent() {
        let bom = r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "components": []}"#;
        assert!(CycloneDxReader::new().parse_str(bom).is_none());
    }

    #[test]
    fn test_component_without_descriptive_fields_is_absent() {
        let bom = r#"{"metadata": {"component": {"name": "acme-app", "version": "1.0"}}}"#;
        assert!(CycloneDxReader::new().parse_str(bom).is_none());
    }

    #[test]
    fn test_invalid_json_is_absent() {
        assert!(CycloneDxReader::new().parse_str("<bom/>").is_none());
    }

    #[test]
    fn test_missing_file_is_absent() {
        let reader = CycloneDxReader::new();
        assert!(reader
            .parse(Path::new("/nonexistent/dir/bom.json"))
            .is_none());
    }

    #[test]
    fn test_parse_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.json");
        fs::write(&path, FULL_BOM).unwrap();

        let info = CycloneDxReader::new().parse(&path).unwrap();
        assert_eq!(info.description.as_deref(), Some("Acme application"));
    }
}
