//! Project model and manifest-derived project metadata.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::DtrackClient;
use crate::error::TransportError;
use crate::response::Response;
use crate::traits::ProjectGateway;

const PROJECT_PATH: &str = "api/v1/project";

/// A Dependency-Track project.
///
/// A project is identified either by its server-assigned UUID or by its
/// name and version pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier.
    #[serde(rename = "uuid", alias = "id")]
    pub id: String,

    /// Project name.
    pub name: String,

    /// Project version.
    pub version: String,

    /// Project description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Component classifier (e.g. "APPLICATION", "LIBRARY").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Namespace or group of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,

    /// Package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swid_tag_id: Option<String>,

    /// Whether the project is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// When a BOM was last imported, in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bom_import: Option<i64>,
}

impl Project {
    /// Create a project with only the identifying fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            description: None,
            classifier: None,
            author: None,
            publisher: None,
            group: None,
            cpe: None,
            purl: None,
            swid_tag_id: None,
            active: None,
            last_bom_import: None,
        }
    }

    /// Get the project's UUID (alias for id).
    pub fn uuid(&self) -> &str {
        &self.id
    }

    /// When a BOM was last imported, if ever.
    pub fn last_bom_import_at(&self) -> Option<DateTime<Utc>> {
        self.last_bom_import.and_then(DateTime::from_timestamp_millis)
    }

    /// Overwrite descriptive fields with the ones set in `info`.
    pub fn apply(&mut self, info: &ProjectInfo) {
        fn merge(target: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        merge(&mut self.classifier, &info.classifier);
        merge(&mut self.author, &info.author);
        merge(&mut self.publisher, &info.publisher);
        merge(&mut self.group, &info.group);
        merge(&mut self.description, &info.description);
        merge(&mut self.cpe, &info.cpe);
        merge(&mut self.purl, &info.purl);
        merge(&mut self.swid_tag_id, &info.swid_tag_id);
    }
}

/// Descriptive project metadata read from a local manifest.
///
/// Serialized form is the body of a project PATCH request; unset fields are
/// omitted so the server leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Component classifier (e.g. "APPLICATION").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swid_tag_id: Option<String>,
}

impl ProjectInfo {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Query parameters for looking up a project.
#[derive(Debug, Serialize)]
struct LookupQuery<'a> {
    name: &'a str,
    version: &'a str,
}

#[async_trait]
impl ProjectGateway for DtrackClient {
    #[tracing::instrument(skip(self))]
    async fn fetch(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Response<Project>, TransportError> {
        let path = format!("{PROJECT_PATH}/lookup");
        let response = self
            .get_with_query(&path, &LookupQuery { name, version })
            .await?;
        Response::from_http(response).await
    }

    #[tracing::instrument(skip(self, info))]
    async fn patch(&self, id: &str, info: &ProjectInfo) -> Result<Response<()>, TransportError> {
        let path = format!("{PROJECT_PATH}/{id}");
        let response = self.patch_json(&path, info).await?;
        Ok(Response::discard_body(&response))
    }

    #[tracing::instrument(skip(self, project), fields(project = %project.id))]
    async fn delete(&self, project: &Project) -> Result<Response<()>, TransportError> {
        let path = format!("{PROJECT_PATH}/{}", project.id);
        let response = self.delete_resource(&path).await?;
        Ok(Response::discard_body(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_accepts_uuid_and_id_keys() {
        let from_uuid: Project = serde_json::from_value(serde_json::json!({
            "uuid": "u1",
            "name": "acme-app",
            "version": "1.0"
        }))
        .unwrap();
        let from_id: Project = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "acme-app",
            "version": "1.0"
        }))
        .unwrap();

        assert_eq!(from_uuid, Project::new("u1", "acme-app", "1.0"));
        assert_eq!(from_uuid, from_id);
    }

    #[test]
    fn test_project_ignores_unknown_server_fields() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "uuid": "u1",
            "name": "acme-app",
            "version": "1.0",
            "lastBomImport": 1_700_000_000_000_i64,
            "tags": [{"name": "prod"}],
            "metrics": {"critical": 0}
        }))
        .unwrap();

        assert_eq!(project.last_bom_import, Some(1_700_000_000_000));
        assert_eq!(
            project.last_bom_import_at().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn test_project_info_omits_unset_fields() {
        let info = ProjectInfo {
            description: Some("Acme application".to_string()),
            swid_tag_id: Some("swid-1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Acme application",
                "swidTagId": "swid-1"
            })
        );
    }

    #[test]
    fn test_project_info_is_empty() {
        assert!(ProjectInfo::default().is_empty());
        let info = ProjectInfo {
            author: Some("Jane".to_string()),
            ..Default::default()
        };
        assert!(!info.is_empty());
    }

    #[test]
    fn test_apply_only_overwrites_set_fields() {
        let mut project = Project::new("u1", "acme-app", "1.0");
        project.description = Some("old".to_string());
        project.author = Some("Jane".to_string());

        project.apply(&ProjectInfo {
            description: Some("new".to_string()),
            purl: Some("pkg:maven/io.acme/acme-app@1.0".to_string()),
            ..Default::default()
        });

        assert_eq!(project.description.as_deref(), Some("new"));
        assert_eq!(project.author.as_deref(), Some("Jane"));
        assert_eq!(project.purl.as_deref(), Some("pkg:maven/io.acme/acme-app@1.0"));
    }
}
