//! Inline text entry.

use anyhow::Result;

use crate::context::BuildContext;
use crate::entry::{Contents, Entry};
use crate::node::Node;

/// Entry whose contents are the UTF-8 bytes of the node's `text` property.
#[derive(Debug)]
pub struct TextEntry {
    name: String,
    path: String,
    text: String,
    contents: Option<Vec<u8>>,
}

impl TextEntry {
    pub(crate) fn create(node: &Node, path: String) -> Result<Box<dyn Entry>> {
        let text = node.required_prop("text")?.to_string();
        Ok(Box::new(Self {
            name: node.name.clone(),
            path,
            text,
            contents: None,
        }))
    }
}

impl Entry for TextEntry {
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
        let data = self.text.clone().into_bytes();
        self.contents = Some(data.clone());
        Ok(Contents::Ready(data))
    }

    fn data(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::create;
    use tempfile::TempDir;

    #[test]
    fn test_text_contents() {
        let temp = TempDir::new().unwrap();
        let mut ctx = BuildContext::new(temp.path());

        let node = Node::new("version", "text").with_prop("text", "v1.2.3");
        let mut entry = create(&node, "").unwrap();
        let contents = entry.obtain_contents(&mut ctx).unwrap();
        assert_eq!(contents, Contents::Ready(b"v1.2.3".to_vec()));
        assert_eq!(entry.data(), Some(b"v1.2.3".as_slice()));
    }

    #[test]
    fn test_text_property_required() {
        let node = Node::new("version", "text");
        assert!(create(&node, "").is_err());
    }
}
