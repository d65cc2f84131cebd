//! Fixed-size fill entry.

use anyhow::{bail, Result};

use crate::context::BuildContext;
use crate::entry::{Contents, Entry};
use crate::node::Node;

/// Entry producing `size` copies of a fill byte (property `fill-byte`,
/// default 0). Used for padding and erased-flash regions.
#[derive(Debug)]
pub struct FillEntry {
    name: String,
    path: String,
    size: u64,
    fill_byte: u8,
    contents: Option<Vec<u8>>,
}

impl FillEntry {
    pub(crate) fn create(node: &Node, path: String) -> Result<Box<dyn Entry>> {
        let size: u64 = node.required_prop("size")?.parse().map_err(|_| {
            anyhow::anyhow!(
                "node '{}': property 'size' is not a number: '{}'",
                node.name,
                node.prop("size").unwrap_or_default()
            )
        })?;
        let fill_byte = node.prop_u64("fill-byte", 0)?;
        if fill_byte > u8::MAX as u64 {
            bail!(
                "node '{}': 'fill-byte' must fit a byte, got {}",
                node.name,
                fill_byte
            );
        }
        Ok(Box::new(Self {
            name: node.name.clone(),
            path,
            size,
            fill_byte: fill_byte as u8,
            contents: None,
        }))
    }
}

impl Entry for FillEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn read_node(&mut self) -> Result<()> {
        Ok(())
    }

    fn obtain_contents(&mut self, _ctx: &mut BuildContext) -> Result<Contents> {
        let data = vec![self.fill_byte; self.size as usize];
        self.contents = Some(data.clone());
        Ok(Contents::Ready(data))
    }

    fn data(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}
