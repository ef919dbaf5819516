//! XML table file writing
//!
//! Output matches the mission files the game server ships: a UTF-8
//! declaration and four-space indentation per depth level.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::document::{XmlDocument, XmlNode};
use crate::error::Result;

/// Write a document to disk, creating missing parent directories.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_document<P: AsRef<Path>>(doc: &XmlDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let xml = serialize_document(doc)?;
    fs::write(path, xml)?;
    Ok(())
}

/// Serialize a document to an XML string.
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_document(doc: &XmlDocument) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 4);

    // XML declaration
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    write_node(&mut writer, &doc.root)?;

    let mut xml = String::from_utf8(output)?;
    xml.push('\n');
    Ok(xml)
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let has_text = node.text.as_deref().is_some_and(|t| !t.is_empty());
    if !has_text && node.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;

    if let Some(ref text) = node.text {
        if !text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
