//! Trait definitions for the collaborators of the reconciler.
//!
//! The reconciler only talks to the outside world through these traits,
//! so either side can be swapped for a test double.

mod gateway;
mod manifest;

pub use gateway::ProjectGateway;
pub use manifest::ManifestReader;
