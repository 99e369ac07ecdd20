//! Error types for ms2mml conversion
//!
//! Only one failure exists at the document level: the input is not
//! well-formed XML. Missing tags, attributes and text are never errors,
//! they resolve to defaults during extraction.

use thiserror::Error;

/// Fatal XML parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// XML is malformed (not well-formed). Carries the parser's message.
    #[error("XML Parse Error: {0}")]
    InvalidXml(String),
}

/// Top-level conversion error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        ParseError::InvalidXml(err.to_string())
    }
}
