//! Dependency-Track project reconciliation library.
//!
//! Fetches, patches, and deletes projects on a Dependency-Track server, and
//! keeps a project's descriptive metadata in line with a local CycloneDX
//! bill of materials.
//!
//! # Quick Start
//!
//! ```no_run
//! use dtrackapi::ProjectReconciler;
//!
//! #[tokio::main]
//! async fn main() -> dtrackapi::Result<()> {
//!     // Create a reconciler from environment variables
//!     let reconciler = ProjectReconciler::from_env()?;
//!
//!     // Look up a project by name and version
//!     let project = reconciler.get_project("acme-app", "1.0").await?;
//!     println!("Project: {} ({})", project.name, project.uuid());
//!
//!     // Copy metadata from the BOM onto the project
//!     let updated = reconciler
//!         .update_project_info(&project, "target/bom.json")
//!         .await?;
//!     println!("Metadata updated: {updated}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`ProjectGateway`] - raw fetch/patch/delete calls, implemented by
//!   [`DtrackClient`]
//! - [`ManifestReader`] - local BOM parsing, implemented by
//!   [`CycloneDxReader`]
//! - [`ProjectReconciler`] - interprets gateway answers and drives the
//!   update workflow
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `DTRACK_API_KEY` (required) - Your Dependency-Track API key
//! - `DTRACK_API_URL` (optional) - Base URL (defaults to `http://localhost:8081`)

pub mod cli;
#[cfg(feature = "test-server")]
pub mod mock_server;

mod bom;
mod client;
mod error;
mod models;
mod output;
mod reconciler;
mod response;
mod traits;

// Re-export core types
pub use client::DtrackClient;
pub use error::{DtrackError, Result, TransportError};
pub use response::Response;

// Re-export traits
pub use traits::{ManifestReader, ProjectGateway};

// Re-export models
pub use models::{Project, ProjectInfo};

pub use bom::CycloneDxReader;
pub use output::PrettyPrint;
pub use reconciler::ProjectReconciler;
