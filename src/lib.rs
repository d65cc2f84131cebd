//! Composite firmware image assembly from declarative entry trees.
//!
//! A firmware image is described as a tree of entries. Leaves produce bytes
//! (external blob files, fill patterns, inline text); a composite entry
//! concatenates its children in document order and runs an external
//! formatting tool (mkimage and friends) over the result, adopting the
//! tool's output as its own contents.
//!
//! ```text
//! image (composite, tool = "mkimage", args = "-n test -T imximage")
//!     ├── spl   (blob, filename = "u-boot-spl.bin")
//!     ├── pad   (fill, size = "16")
//!     └── ver   (text, text = "v1.2.3")
//! ```
//!
//! Two conditions are handled without failing the build:
//!
//! - **Not ready**: a child whose data depends on something unresolved
//!   elsewhere answers [`entry::Contents::NotReady`]; the whole assembly
//!   aborts cleanly and can be retried later.
//! - **Missing tool**: a formatter that is not installed on the host
//!   degrades the composite to its raw concatenation and leaves a record in
//!   [`diagnostics::Diagnostics`] for end-of-build reporting.
//!
//! Layout-only builds on hosts without the proprietary blob files can set
//! the allow-fake-blob policy on the tree root; it fans out to every leaf,
//! and `check_faked_blobs` reports which entries synthesized placeholders.
//!
//! # Example
//!
//! ```rust,ignore
//! use firmware_builder::{BuildContext, CompositeEntry, Entry, Node};
//!
//! let node: Node = serde_json::from_str(description)?;
//! let mut image = CompositeEntry::from_node(&node, node.name.clone())?;
//! let mut ctx = BuildContext::new("build/out");
//! ctx.add_input_dir("blobs/");
//! let contents = image.obtain_contents(&mut ctx)?;
//! ctx.diagnostics.report();
//! ```
//!
//! Out of scope: parsing the description format itself (device tree etc.),
//! offset/size layout inside a larger image, and the formatter tools'
//! argument syntax.

pub mod bintool;
pub mod context;
pub mod diagnostics;
pub mod entry;
pub mod node;

#[cfg(test)]
pub(crate) mod testutil;

pub use bintool::{Bintool, FormatterStatus};
pub use context::BuildContext;
pub use diagnostics::{Diagnostics, MissingTool};
pub use entry::composite::CompositeEntry;
pub use entry::{Contents, Entry};
pub use node::Node;
