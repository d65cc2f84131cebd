//! Image entries.
//!
//! An entry is one node of the image tree that can produce binary data on
//! demand. Entries are polymorphic over their declared type: leaf types
//! ([`blob`], [`fill`], [`text`]) produce bytes directly, while
//! [`composite`] aggregates its children and runs an external formatter
//! over the result.
//!
//! Data is not always available on the first ask: an entry whose inputs
//! depend on something unresolved elsewhere in the tree answers
//! [`Contents::NotReady`], and the caller retries the whole pass later.
//! That is distinct from failure, which travels as an ordinary error.

pub mod blob;
pub mod composite;
pub mod fill;
pub mod text;

use anyhow::{bail, Result};

use crate::context::BuildContext;
use crate::node::Node;

/// Outcome of a contents-collection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    /// Data was produced; also cached on the entry for [`Entry::data`].
    Ready(Vec<u8>),
    /// A dependency is unresolved; retry the whole pass later. Nothing was
    /// cached or written.
    NotReady,
}

/// One node of the image tree, capable of producing binary data on demand.
pub trait Entry: std::fmt::Debug {
    /// Node name (unique among siblings).
    fn name(&self) -> &str;

    /// Slash-separated path from the tree root, for diagnostics and
    /// intermediate-file naming.
    fn path(&self) -> &str;

    /// Finish initialization from the node. Called exactly once, during
    /// tree construction, before any contents are requested.
    fn read_node(&mut self) -> Result<()>;

    /// Produce this entry's data. Recomputed on every call; a `NotReady`
    /// answer leaves no state behind, so retrying later is equivalent to
    /// asking fresh.
    fn obtain_contents(&mut self, ctx: &mut BuildContext) -> Result<Contents>;

    /// Data from the last successful [`Entry::obtain_contents`] call, if any.
    fn data(&self) -> Option<&[u8]>;

    /// Set whether missing external blob files may be synthesized as
    /// placeholder data, for layout-only builds. Fans out through composite
    /// entries; leaves interpret it. Call before requesting contents.
    fn set_allow_fake_blob(&mut self, _allow: bool) {}

    /// Append the paths of entries that produced fake data to `faked`, in
    /// child traversal order. Composites fan out and never list themselves.
    fn check_faked_blobs(&self, _faked: &mut Vec<String>) {}
}

type Constructor = fn(&Node, String) -> Result<Box<dyn Entry>>;

/// Known entry types. Declared type name in the description maps to a
/// constructor here.
const ENTRY_TYPES: &[(&str, Constructor)] = &[
    ("blob", blob::BlobEntry::create),
    ("composite", composite::CompositeEntry::create),
    ("fill", fill::FillEntry::create),
    ("text", text::TextEntry::create),
];

/// Construct and initialize the entry for `node`.
///
/// `parent_path` is the slash-separated path of the parent entry (empty for
/// the tree root). The returned entry has had `read_node` run; composites
/// have their whole subtree built.
pub fn create(node: &Node, parent_path: &str) -> Result<Box<dyn Entry>> {
    let path = if parent_path.is_empty() {
        node.name.clone()
    } else {
        format!("{}/{}", parent_path, node.name)
    };

    for (etype, constructor) in ENTRY_TYPES {
        if *etype == node.etype {
            let mut entry = constructor(node, path)?;
            entry.read_node()?;
            return Ok(entry);
        }
    }

    bail!(
        "node '{}' declares unknown entry type '{}'",
        path,
        node.etype
    )
}
