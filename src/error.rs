//! Error types for `dayzmerge`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `dayzmerge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Parsing Errors ====================
    /// A table file exists but its content is not well-formed XML.
    ///
    /// Callers log this and skip the one file; it never aborts a batch.
    #[error("failed to parse {path:?}: {message}")]
    ParseFailed {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying XML error message.
        message: String,
    },

    /// The document contained no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `dayzmerge` operations.
pub type Result<T> = std::result::Result<T, Error>;
