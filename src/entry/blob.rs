//! External blob entry.
//!
//! Pulls a binary file (SPL, ROM blob, microcode, ...) from the context's
//! input search directories. The file may be proprietary and absent from the
//! build host; with the allow-fake policy set, a zero-filled placeholder is
//! synthesized instead so layout-only builds can proceed, and the entry
//! reports itself through `check_faked_blobs`.

use std::fs;

use anyhow::{bail, Context, Result};

use crate::context::BuildContext;
use crate::entry::{Contents, Entry};
use crate::node::Node;

/// Placeholder size when the node does not declare one.
const DEFAULT_FAKE_SIZE: u64 = 1024;

/// Entry whose contents come from an external file named by the `filename`
/// property.
#[derive(Debug)]
pub struct BlobEntry {
    name: String,
    path: String,
    filename: String,
    /// Declared size, used only to size a placeholder.
    size: u64,
    allow_fake: bool,
    faked: bool,
    contents: Option<Vec<u8>>,
}

impl BlobEntry {
    pub(crate) fn create(node: &Node, path: String) -> Result<Box<dyn Entry>> {
        let filename = node.required_prop("filename")?.to_string();
        let size = node.prop_u64("size", DEFAULT_FAKE_SIZE)?;
        Ok(Box::new(Self {
            name: node.name.clone(),
            path,
            filename,
            size,
            allow_fake: false,
            faked: false,
            contents: None,
        }))
    }
}

impl Entry for BlobEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn read_node(&mut self) -> Result<()> {
        Ok(())
    }

    fn obtain_contents(&mut self, ctx: &mut BuildContext) -> Result<Contents> {
        if let Some(found) = ctx.find_input(&self.filename) {
            let data = fs::read(&found)
                .with_context(|| format!("reading blob file '{}'", found.display()))?;
            self.faked = false;
            self.contents = Some(data.clone());
            return Ok(Contents::Ready(data));
        }

        if self.allow_fake {
            let data = vec![0u8; self.size as usize];
            self.faked = true;
            self.contents = Some(data.clone());
            return Ok(Contents::Ready(data));
        }

        let searched = if ctx.input_dirs().is_empty() {
            "<no input dirs>".to_string()
        } else {
            ctx.input_dirs()
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        bail!(
            "entry '{}': blob file '{}' not found (searched: {})",
            self.path,
            self.filename,
            searched
        )
    }

    fn data(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    fn set_allow_fake_blob(&mut self, allow: bool) {
        self.allow_fake = allow;
    }

    fn check_faked_blobs(&self, faked: &mut Vec<String>) {
        if self.faked {
            faked.push(self.path.clone());
        }
    }
}
