//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the dtrack binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dependency-Track project command-line interface.
#[derive(Parser, Debug)]
#[command(name = "dtrack", about = "Dependency-Track project CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of key/value text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Emit debug logs on stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a project by name and version.
    Get {
        /// Project name.
        name: String,

        /// Project version.
        version: String,
    },

    /// Copy metadata from a CycloneDX BOM onto a project.
    #[command(name = "update-info")]
    UpdateInfo {
        /// Project name.
        name: String,

        /// Project version.
        version: String,

        /// Path to the CycloneDX JSON BOM.
        #[arg(long, env = "DTRACK_BOM")]
        bom: PathBuf,
    },

    /// Delete a project.
    Delete {
        /// Project name.
        name: String,

        /// Project version.
        version: String,
    },
}
