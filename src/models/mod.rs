//! Dependency-Track model types.

mod project;

pub use project::*;
