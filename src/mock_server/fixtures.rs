//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::Project;

/// A CycloneDX JSON BOM describing `acme-app` 1.0.
pub const ACME_BOM: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.4",
    "version": 1,
    "metadata": {
        "component": {
            "type": "application",
            "group": "io.acme",
            "name": "acme-app",
            "version": "1.0",
            "author": "Jane Doe",
            "publisher": "Acme Corp",
            "description": "Acme application",
            "purl": "pkg:maven/io.acme/acme-app@1.0"
        }
    },
    "components": []
}"#;

/// A CycloneDX JSON BOM with no metadata component.
pub const MINIMAL_BOM: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.4",
    "version": 1,
    "components": []
}"#;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a minimal project with required fields only.
    pub fn minimal_project(uuid: &str, name: &str, version: &str) -> Project {
        Project::new(uuid, name, version)
    }

    /// Create a project that has already received a BOM.
    pub fn imported_project(uuid: &str, name: &str, version: &str) -> Project {
        let mut project = Self::minimal_project(uuid, name, version);
        project.classifier = Some("APPLICATION".to_string());
        project.active = Some(true);
        project.last_bom_import = Some(1_700_000_000_000);
        project
    }

    // =========================================================================
    // BOM Fixtures
    // =========================================================================

    /// A BOM whose metadata component describes `acme-app` 1.0.
    pub fn acme_bom() -> &'static str {
        ACME_BOM
    }

    /// A BOM without project metadata.
    pub fn minimal_bom() -> &'static str {
        MINIMAL_BOM
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario.
pub struct DefaultScenario {
    pub projects: Vec<Project>,
}

impl DefaultScenario {
    fn new() -> Self {
        let projects = vec![
            Fixtures::minimal_project("u1", "acme-app", "1.0"),
            Fixtures::imported_project("u2", "acme-app", "2.0"),
            Fixtures::minimal_project("u3", "acme-lib", "0.3.1"),
        ];

        Self { projects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CycloneDxReader;

    #[test]
    fn test_minimal_project() {
        let project = Fixtures::minimal_project("u1", "acme-app", "1.0");
        assert_eq!(project.id, "u1");
        assert_eq!(project.name, "acme-app");
        assert!(project.description.is_none());
    }

    #[test]
    fn test_bom_fixtures_parse() {
        let reader = CycloneDxReader::new();
        let info = reader.parse_str(Fixtures::acme_bom()).unwrap();
        assert_eq!(info.description.as_deref(), Some("Acme application"));
        assert!(reader.parse_str(Fixtures::minimal_bom()).is_none());
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert_eq!(scenario.projects.len(), 3);
        assert!(scenario.projects.iter().any(|p| p.id == "u1"));
    }
}
