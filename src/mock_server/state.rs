//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Dependency-Track server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Project, ProjectInfo};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by UUID.
    pub projects: HashMap<String, Project>,

    /// Optional API key. If set, requests must send it in `X-Api-Key`.
    pub required_api_key: Option<String>,

    /// If set, every project request is answered with this status and no body.
    pub forced_status: Option<u16>,

    /// Number of project requests received.
    pub requests: usize,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.id.clone(), project);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, api_key: &str) -> Self {
        self.required_api_key = Some(api_key.to_string());
        self
    }

    /// Answer every project request with `status`.
    pub fn with_forced_status(mut self, status: u16) -> Self {
        self.forced_status = Some(status);
        self
    }

    /// Find a project by name and version.
    pub fn lookup_project(&self, name: &str, version: &str) -> Option<&Project> {
        self.projects
            .values()
            .find(|p| p.name == name && p.version == version)
    }

    /// Apply metadata to a project and return the updated version.
    pub fn patch_project(&mut self, uuid: &str, info: &ProjectInfo) -> Option<&Project> {
        let project = self.projects.get_mut(uuid)?;
        project.apply(info);
        Some(&*project)
    }

    /// Remove a project, returning it if it existed.
    pub fn delete_project(&mut self, uuid: &str) -> Option<Project> {
        self.projects.remove(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_lookup_by_name_and_version() {
        let state = MockState::new()
            .with_project(Project::new("u1", "acme-app", "1.0"))
            .with_project(Project::new("u2", "acme-app", "2.0"))
            .with_project(Project::new("u3", "other", "1.0"));

        assert_eq!(state.lookup_project("acme-app", "2.0").unwrap().id, "u2");
        assert_eq!(state.lookup_project("other", "1.0").unwrap().id, "u3");
        assert!(state.lookup_project("acme-app", "3.0").is_none());
    }

    #[test]
    fn test_state_patch_project() {
        let mut state = MockState::new().with_project(Project::new("u1", "acme-app", "1.0"));

        let info = ProjectInfo {
            description: Some("Patched".to_string()),
            ..Default::default()
        };
        let project = state.patch_project("u1", &info).unwrap();
        assert_eq!(project.description.as_deref(), Some("Patched"));

        assert!(state.patch_project("missing", &info).is_none());
    }

    #[test]
    fn test_state_delete_project() {
        let mut state = MockState::new().with_project(Project::new("u1", "acme-app", "1.0"));

        assert!(state.delete_project("u1").is_some());
        assert!(state.delete_project("u1").is_none());
        assert!(state.projects.is_empty());
    }
}
