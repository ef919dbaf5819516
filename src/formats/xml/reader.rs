//! XML table file reading

use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::document::{XmlDocument, XmlNode};
use crate::error::{Error, Result};

/// Read a table document from disk.
///
/// A missing file is not an error: it returns `Ok(None)` so callers can start
/// from an empty document of the expected root kind. A file that exists but
/// does not parse yields [`Error::ParseFailed`] carrying the path.
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Option<XmlDocument>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    match parse_document(&content) {
        Ok(doc) => Ok(Some(doc)),
        Err(err) => Err(Error::ParseFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
    }
}

/// Parse a document from an XML string.
///
/// Whitespace-only text between elements is dropped; element text content and
/// attribute order are preserved.
///
/// # Errors
/// Returns an error if the XML is malformed or has no root element.
pub fn parse_document(content: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut node_stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                node_stack.push(node_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let node = node_from_start(&e)?;
                if let Some(parent) = node_stack.last_mut() {
                    parent.children.push(node);
                } else if root.is_none() {
                    root = Some(node);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = node_stack.last_mut() {
                    let text = e.unescape()?.into_owned();
                    node.text = Some(text);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = node_stack.pop() {
                    if let Some(parent) = node_stack.last_mut() {
                        parent.children.push(completed);
                    } else if root.is_none() {
                        root = Some(completed);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            // Declarations, comments, processing instructions
            _ => {}
        }
        buf.clear();
    }

    let root = root.ok_or(Error::MissingRoot)?;
    Ok(XmlDocument { root })
}

/// Build a node from a start (or self-closing) tag, capturing all attributes
/// in document order.
fn node_from_start(e: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut node = XmlNode::new(&tag);
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        node.attributes.insert(key, value);
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_type_table() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<types>
    <type name="AKM">
        <nominal>10</nominal>
        <flags count_in_cargo="1" count_in_map="0"/>
        <category name="weapons"/>
    </type>
</types>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.root.tag, "types");
        assert_eq!(doc.root.children.len(), 1);

        let entry = &doc.root.children[0];
        assert_eq!(entry.tag, "type");
        assert_eq!(entry.attr("name"), Some("AKM"));
        assert_eq!(entry.child_text("nominal"), Some("10"));

        let flags = entry.child("flags").unwrap();
        assert_eq!(flags.attr("count_in_cargo"), Some("1"));
        assert_eq!(flags.attr("count_in_map"), Some("0"));
        // Attribute order is document order
        let keys: Vec<_> = flags.attributes.keys().collect();
        assert_eq!(keys, vec!["count_in_cargo", "count_in_map"]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let xml = "<types><type name=\"AKM\"></types>";
        assert!(parse_document(xml).is_err());
    }

    #[test]
    fn test_parse_empty_input_has_no_root() {
        assert!(matches!(parse_document(""), Err(Error::MissingRoot)));
    }

    #[test]
    fn test_read_missing_file_is_absent() {
        let result = read_document("does/not/exist/types.xml").unwrap();
        assert!(result.is_none());
    }
}
