//! Build diagnostics.
//!
//! Non-fatal conditions observed during assembly are accumulated here rather
//! than kept in per-entry globals, so nested composites all feed one record
//! set. Today that is missing-tool records: an external formatter was not
//! installed and a degraded (unformatted) result was produced in its place.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One missing-tool record: `entry` fell back to raw concatenation because
/// `tool` is not installed on the host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MissingTool {
    pub tool: String,
    pub entry: String,
}

/// Accumulator for non-fatal build diagnostics.
#[derive(Debug, Default, Serialize)]
pub struct Diagnostics {
    missing_tools: Vec<MissingTool>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `entry` could not run `tool`. Re-recording the same
    /// (tool, entry) pair is a no-op, so a retried assembly still yields
    /// exactly one record.
    pub fn record_missing_tool(&mut self, tool: &str, entry: &str) {
        let already = self
            .missing_tools
            .iter()
            .any(|record| record.tool == tool && record.entry == entry);
        if !already {
            self.missing_tools.push(MissingTool {
                tool: tool.to_string(),
                entry: entry.to_string(),
            });
        }
    }

    pub fn missing_tools(&self) -> &[MissingTool] {
        &self.missing_tools
    }

    pub fn is_clean(&self) -> bool {
        self.missing_tools.is_empty()
    }

    /// Print a warning per record to stderr. Call once at the end of a
    /// build; a missing tool degrades the image, it does not fail the build.
    pub fn report(&self) {
        for record in &self.missing_tools {
            eprintln!(
                "warning: tool '{}' not found; entry '{}' contains unformatted data",
                record.tool, record.entry
            );
        }
    }

    /// Write the records as JSON, alongside the other build outputs.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)
            .context("serializing build diagnostics")?;
        fs::write(path, json)
            .with_context(|| format!("writing build diagnostics '{}'", path.display()))?;
        Ok(())
    }
}
