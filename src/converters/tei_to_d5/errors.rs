//! Error types for EpiDoc conversion
//!
//! Only problems that prevent any output are errors. Line-level problems
//! are diagnostics and travel with the result instead.

use crate::formatter::FormatError;
use thiserror::Error;

/// Top-level conversion error type
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// Fatal XML parsing error
    #[error("XML parsing failed: {0}")]
    Parse(#[from] ParseError),

    /// Line validation gave up
    #[error("Line formatting failed: {0}")]
    Format(#[from] FormatError),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Fatal input errors
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// Input file could not be read
    #[error("Cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::Io(err.to_string())
    }
}
