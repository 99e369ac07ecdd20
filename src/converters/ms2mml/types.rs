//! Data types for ms2mml conversion

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::converters::ms2mml::normalize::MmlRewrite;

/// Prefix applied to every field key in a successful conversion
pub const CONVERTED_PREFIX: &str = "converted_";

// ============================================================================
// EXTRACTED FIELDS
// ============================================================================

/// Raw text of each recognized voice part, keyed by field key
/// (`melody`, `chord_<index>`).
///
/// Insertion order is kept; inserting an existing key replaces its value
/// in place, so the last element carrying a given key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    fields: IndexMap<String, String>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous raw text on key collision
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), text.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// CONVERSION RESULT
// ============================================================================

/// Outcome of one ms2mml conversion.
///
/// Serializes as a flat object: either `{"converted_melody": ..., ...}`
/// or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConversionResult {
    /// One normalized entry per extracted field, keys prefixed with `converted_`
    Converted(IndexMap<String, String>),

    /// The document could not be parsed
    Error { error: String },
}

impl ConversionResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ConversionResult::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConversionResult::Error { error } => Some(error),
            ConversionResult::Converted(_) => None,
        }
    }

    /// Look up a value by its full key (`converted_melody`, `error`, ...)
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            ConversionResult::Converted(fields) => fields.get(key).map(String::as_str),
            ConversionResult::Error { error } => (key == "error").then_some(error.as_str()),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            ConversionResult::Converted(fields) => fields.keys().map(String::as_str).collect(),
            ConversionResult::Error { .. } => vec!["error"],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ConversionResult::Converted(fields) => fields.len(),
            ConversionResult::Error { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Conversion settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Substitutions applied to every field after line-break removal and trimming
    pub rewrites: Vec<MmlRewrite>,
}
