//! Mock Dependency-Track server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Dependency-Track project API for integration and end-to-end testing.
//! Unlike wiremock which mocks at the HTTP level per-test, this server
//! maintains state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use dtrackapi::mock_server::MockServer;
//! use dtrackapi::{CycloneDxReader, DtrackClient, ProjectReconciler};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = DtrackClient::new("test-key", server.url()).unwrap();
//!     let reconciler = ProjectReconciler::new(client, CycloneDxReader::new());
//!
//!     // Server comes with default fixtures
//!     let project = reconciler.get_project("acme-app", "1.0").await.unwrap();
//!     assert_eq!(project.id, "u1");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
