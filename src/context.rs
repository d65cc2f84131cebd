//! Build context.
//!
//! Carries the per-run state every entry needs while producing contents:
//! where intermediate files go, where external blob files are searched for,
//! and the diagnostics accumulator.

use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;

/// Per-run build state, passed down the entry tree during assembly.
pub struct BuildContext {
    /// Directory for intermediate files (formatter inputs/outputs).
    /// Build-run-scoped; callers typically hand in a fresh directory.
    output_dir: PathBuf,

    /// Directories searched, in order, for external blob files.
    input_dirs: Vec<PathBuf>,

    /// Non-fatal findings (missing tools) collected across the tree.
    pub diagnostics: Diagnostics,
}

impl BuildContext {
    /// Create a context with no input search directories.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            input_dirs: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Add a directory to search for external blob files.
    pub fn add_input_dir(&mut self, dir: impl Into<PathBuf>) {
        self.input_dirs.push(dir.into());
    }

    /// Path for an intermediate file in the build output directory.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Find an input file by searching the input directories in order.
    /// First hit wins.
    pub fn find_input(&self, filename: &str) -> Option<PathBuf> {
        self.input_dirs
            .iter()
            .map(|dir| dir.join(filename))
            .find(|candidate| candidate.is_file())
    }

    pub fn input_dirs(&self) -> &[PathBuf] {
        &self.input_dirs
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
