//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Project;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project: {} {}", self.name, self.version);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider, format!("UUID:           {}", self.id)];

        let optional = [
            ("Classifier:     ", &self.classifier),
            ("Group:          ", &self.group),
            ("Description:    ", &self.description),
            ("Author:         ", &self.author),
            ("Publisher:      ", &self.publisher),
            ("PURL:           ", &self.purl),
            ("CPE:            ", &self.cpe),
            ("SWID Tag:       ", &self.swid_tag_id),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                lines.push(format!("{label}{value}"));
            }
        }

        if let Some(active) = self.active {
            lines.push(format!("Active:         {}", if active { "yes" } else { "no" }));
        }

        if let Some(imported) = self.last_bom_import_at() {
            lines.push(format!(
                "Last BOM:       {}",
                imported.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        lines.join("\n")
    }
}
