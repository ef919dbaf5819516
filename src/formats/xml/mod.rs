//! Generic XML document model for DayZ server table files

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{XmlDocument, XmlNode};
pub use reader::{parse_document, read_document};
pub use writer::{serialize_document, write_document};
