//! External formatter tools.
//!
//! A [`Bintool`] wraps one external executable that turns a raw data blob
//! into a specific binary image format (mkimage, futility, ...). The tool
//! may legitimately be absent on the host: resolution happens lazily, and
//! "not installed" is a distinguished outcome callers can degrade on,
//! unlike the tool running and failing, which is a hard error.
//!
//! Invocation convention is fixed:
//!
//! ```text
//! tool -d <input-file> [extra-args...] <output-file>
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Outcome of a formatter invocation that did not hard-fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterStatus {
    /// Tool ran and exited cleanly; the output file holds the result.
    Formatted,
    /// Tool is not installed on the host. No output file was produced.
    ToolMissing,
}

/// A named external formatter executable.
#[derive(Debug, Clone)]
pub struct Bintool {
    name: String,
}

impl Bintool {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locate the executable. Plain names are searched on PATH; names
    /// containing a path separator are checked directly.
    pub fn resolve(&self) -> Option<PathBuf> {
        which::which(&self.name).ok()
    }

    /// Run the formatter on `input`, writing to `output`.
    ///
    /// Returns [`FormatterStatus::ToolMissing`] when the executable cannot
    /// be found. A tool that runs and exits non-zero is an error carrying
    /// the exit code and captured output; it is never masked.
    pub fn run_formatter(
        &self,
        input: &Path,
        extra_args: &[String],
        output: &Path,
    ) -> Result<FormatterStatus> {
        let Some(tool_path) = self.resolve() else {
            return Ok(FormatterStatus::ToolMissing);
        };

        let result = Command::new(&tool_path)
            .arg("-d")
            .arg(input)
            .args(extra_args)
            .arg(output)
            .output();

        let cmd_output = match result {
            Ok(cmd_output) => cmd_output,
            // The tool disappeared between resolve and spawn; same signal
            // as never having been installed.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(FormatterStatus::ToolMissing);
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("running '{}'", tool_path.display()));
            }
        };

        if !cmd_output.status.success() {
            let stdout = String::from_utf8_lossy(&cmd_output.stdout);
            let stderr = String::from_utf8_lossy(&cmd_output.stderr);
            bail!(
                "'{}' failed with exit code {} for '{}': {}\n{}",
                self.name,
                cmd_output.status.code().unwrap_or(-1),
                input.display(),
                stdout.trim(),
                stderr.trim()
            );
        }

        Ok(FormatterStatus::Formatted)
    }
}
