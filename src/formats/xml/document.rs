//! In-memory XML document structures
//!
//!

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed XML document: a single rooted tree of nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XmlDocument {
    /// The root element of the document.
    pub root: XmlNode,
}

/// An element in an XML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Text content, if the element carries any.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlDocument {
    /// Creates a document with an empty root element of the given tag.
    #[must_use]
    pub fn with_root_tag(tag: &str) -> Self {
        XmlDocument {
            root: XmlNode::new(tag),
        }
    }

    /// Iterate the root's direct children with the given tag.
    pub fn entries<'a: 'b, 'b>(
        &'a self,
        entry_tag: &'b str,
    ) -> impl Iterator<Item = &'a XmlNode> + 'b {
        self.root.children.iter().filter(move |c| c.tag == entry_tag)
    }

    /// Collect the `name` attributes of all direct children with the given tag.
    #[must_use]
    pub fn entry_names(&self, entry_tag: &str) -> Vec<&str> {
        self.entries(entry_tag)
            .filter_map(|c| c.attr("name"))
            .collect()
    }
}

impl XmlNode {
    /// Creates a new element with the given tag and no content.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        XmlNode {
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute, preserving insertion order for new keys.
    pub fn set_attr(&mut self, key: &str, value: &str) -> &mut Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Append a child element built from a tag and text content.
    pub fn push_text_child(&mut self, tag: &str, text: &str) -> &mut Self {
        let mut child = XmlNode::new(tag);
        child.text = Some(text.to_string());
        self.children.push(child);
        self
    }

    /// Find the first direct child with the given tag.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Text content of the first direct child with the given tag.
    #[must_use]
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(|c| c.text.as_deref())
    }
}
