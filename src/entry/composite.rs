//! Composite entry: the external-formatter aggregation core.
//!
//! A composite collects the contents of its children in document order,
//! writes the concatenation to an intermediate input file, and runs the
//! node's formatter tool over it (`tool -d <input> <extra-args...>
//! <output>`). The formatter's output becomes this entry's contents. A host
//! without the tool installed still builds: the raw concatenation is adopted
//! instead and a missing-tool diagnostic is recorded.

use std::fs;

use anyhow::{bail, Context, Result};

use crate::bintool::{Bintool, FormatterStatus};
use crate::context::BuildContext;
use crate::entry::{self, Contents, Entry};
use crate::node::Node;

/// Entry that aggregates child data and formats it with an external tool.
///
/// Properties consumed from the node:
/// - `tool`: formatter executable name (searched on PATH; a path-bearing
///   name is used directly)
/// - `args`: extra arguments, split on single spaces (no quoting support),
///   passed verbatim between the input and output paths
#[derive(Debug)]
pub struct CompositeEntry {
    name: String,
    path: String,
    /// Intermediate-file suffix, unique per entry within a build run.
    uniq: String,
    /// Intermediate-file prefix: the tool name without any leading path.
    prefix: String,
    tool: Bintool,
    extra_args: Vec<String>,
    entries: Vec<Box<dyn Entry>>,
    contents: Option<Vec<u8>>,
}

impl CompositeEntry {
    pub(crate) fn create(node: &Node, path: String) -> Result<Box<dyn Entry>> {
        Ok(Box::new(Self::from_node(node, path)?))
    }

    /// Build the composite and its whole subtree from a node. Children are
    /// constructed and initialized here, before any contents are requested.
    pub fn from_node(node: &Node, path: String) -> Result<Self> {
        let tool_name = node.required_prop("tool")?;
        let raw_args = node.required_prop("args")?;
        let extra_args = if raw_args.is_empty() {
            Vec::new()
        } else {
            raw_args.split(' ').map(str::to_string).collect()
        };

        let prefix = tool_name
            .rsplit('/')
            .next()
            .unwrap_or(tool_name)
            .to_string();

        let mut composite = Self {
            name: node.name.clone(),
            path: path.clone(),
            uniq: path.replace('/', "."),
            prefix,
            tool: Bintool::new(tool_name),
            extra_args,
            entries: Vec::new(),
            contents: None,
        };
        composite.read_entries(node)?;
        Ok(composite)
    }

    /// Construct the child entries from the subnodes, in document order.
    fn read_entries(&mut self, node: &Node) -> Result<()> {
        for subnode in &node.subnodes {
            let child = entry::create(subnode, &self.path)?;
            self.add_entry(child)?;
        }
        Ok(())
    }

    /// Append a child entry. Sibling names must be unique; a duplicate is a
    /// configuration error rather than a silent overwrite.
    pub fn add_entry(&mut self, child: Box<dyn Entry>) -> Result<()> {
        if self.entries.iter().any(|e| e.name() == child.name()) {
            bail!(
                "entry '{}' has duplicate child name '{}'",
                self.path,
                child.name()
            );
        }
        self.entries.push(child);
        Ok(())
    }

    /// Look up a direct child by name.
    pub fn entry(&self, name: &str) -> Option<&dyn Entry> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// Child names in document order.
    pub fn entry_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }
}

impl Entry for CompositeEntry {
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
        // Gather every child first. One unready child aborts the whole
        // attempt before anything touches the filesystem, so a later retry
        // starts from scratch.
        let mut pieces = Vec::with_capacity(self.entries.len());
        for child in &mut self.entries {
            match child.obtain_contents(ctx)? {
                Contents::Ready(data) => pieces.push(data),
                Contents::NotReady => return Ok(Contents::NotReady),
            }
        }
        let data = pieces.concat();

        let input_fname = ctx.output_path(&format!("{}.{}", self.prefix, self.uniq));
        fs::write(&input_fname, &data).with_context(|| {
            format!(
                "writing formatter input for '{}' to '{}'",
                self.path,
                input_fname.display()
            )
        })?;
        let output_fname = ctx.output_path(&format!("{}-out.{}", self.prefix, self.uniq));

        match self
            .tool
            .run_formatter(&input_fname, &self.extra_args, &output_fname)?
        {
            FormatterStatus::Formatted => {
                let formatted = fs::read(&output_fname).with_context(|| {
                    format!(
                        "reading formatter output for '{}' from '{}'",
                        self.path,
                        output_fname.display()
                    )
                })?;
                self.contents = Some(formatted.clone());
                Ok(Contents::Ready(formatted))
            }
            FormatterStatus::ToolMissing => {
                // Degraded but usable: ship the raw concatenation and leave
                // a record for the end-of-build report.
                ctx.diagnostics
                    .record_missing_tool(self.tool.name(), &self.path);
                self.contents = Some(data.clone());
                Ok(Contents::Ready(data))
            }
        }
    }

    fn data(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    fn set_allow_fake_blob(&mut self, allow: bool) {
        for child in &mut self.entries {
            child.set_allow_fake_blob(allow);
        }
    }

    fn check_faked_blobs(&self, faked: &mut Vec<String>) {
        for child in &self.entries {
            child.check_faked_blobs(faked);
        }
    }
}
