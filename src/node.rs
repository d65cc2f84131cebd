//! Structural node model.
//!
//! A [`Node`] is one node of the image description: a name, a declared entry
//! type, a flat set of string properties, and an ordered list of subnodes.
//! Parsing the description *format* (device tree, etc.) happens upstream;
//! this crate consumes the already-built tree. Nodes also deserialize from
//! JSON, which is how the tests and embedding tools hand trees in.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::Deserialize;

/// One node of the structural image description.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Node name; must be unique among siblings.
    pub name: String,

    /// Declared entry type, used to pick the constructor (see `entry::create`).
    #[serde(rename = "type")]
    pub etype: String,

    /// String properties declared on the node.
    #[serde(default)]
    pub props: BTreeMap<String, String>,

    /// Subnodes in document order. Order is significant: it becomes the
    /// byte order of assembled contents.
    #[serde(default)]
    pub subnodes: Vec<Node>,
}

impl Node {
    /// Create a node with no properties or subnodes.
    pub fn new(name: impl Into<String>, etype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            etype: etype.into(),
            props: BTreeMap::new(),
            subnodes: Vec::new(),
        }
    }

    /// Add a property (builder style).
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Add a subnode (builder style).
    pub fn with_subnode(mut self, subnode: Node) -> Self {
        self.subnodes.push(subnode);
        self
    }

    /// Look up a property.
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(|value| value.as_str())
    }

    /// Look up a property that must be present.
    pub fn required_prop(&self, key: &str) -> Result<&str> {
        match self.prop(key) {
            Some(value) => Ok(value),
            None => bail!(
                "node '{}' (type '{}') is missing required property '{}'",
                self.name,
                self.etype,
                key
            ),
        }
    }

    /// Look up a numeric property, with a default when absent.
    pub fn prop_u64(&self, key: &str, default: u64) -> Result<u64> {
        match self.prop(key) {
            Some(value) => value.parse().map_err(|_| {
                anyhow::anyhow!(
                    "node '{}': property '{}' is not a number: '{}'",
                    self.name,
                    key,
                    value
                )
            }),
            None => Ok(default),
        }
    }
}
