//! File format handlers for DayZ server mission tables

pub mod tables;
pub mod xml;

// Re-export main document types
pub use tables::TableKind;
pub use xml::{parse_document, read_document, serialize_document, write_document};
pub use xml::{XmlDocument, XmlNode};
