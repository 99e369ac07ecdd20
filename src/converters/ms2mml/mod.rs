//! ms2mml to MML converter module
//!
//! Converts the voice parts of an ms2mml document (one `<melody>` and any
//! number of `<chord index="..">` elements directly under the root) into
//! single-line MML strings.
//!
//! # Overview
//!
//! 1. **Parse**: Parse the document with roxmltree (well-formedness only)
//! 2. **Extract**: Collect raw text per field from the root's direct children
//! 3. **Normalize**: Strip line breaks and surrounding whitespace per field
//!
//! Conversion never fails across this boundary. A malformed document
//! produces [`ConversionResult::Error`] carrying `XML Parse Error: <message>`.
//!
//! # Basic Usage
//!
//! ```
//! use ms2mml_wasm::converters::ms2mml::convert_ms2mml;
//!
//! let xml = "<ms2><melody>t120\nl8 cde</melody><chord index=\"1\">c1</chord></ms2>";
//! let result = convert_ms2mml(xml, None);
//!
//! assert_eq!(result.get("converted_melody"), Some("t120l8 cde"));
//! assert_eq!(result.get("converted_chord_1"), Some("c1"));
//! ```

pub mod errors;
pub mod types;
pub mod parser;
pub mod normalize;

// Re-export main API
pub use errors::{ConversionError, ParseError};
pub use normalize::{normalize_mml_text, MmlNormalizer, MmlRewrite};
pub use parser::{extract_ms2mml_fields, FieldKind, FieldSpec, XmlDocument, MS2MML_FIELDS};
pub use types::{ConversionResult, ConversionSettings, ExtractedFields, CONVERTED_PREFIX};

use indexmap::IndexMap;

/// Convert an ms2mml document to MML fields.
///
/// # Arguments
///
/// * `xml` - ms2mml document as string
/// * `settings` - Optional conversion settings (uses defaults if None)
///
/// # Returns
///
/// `ConversionResult::Converted` with one `converted_<key>` entry per
/// extracted field, or `ConversionResult::Error` if the XML is malformed.
pub fn convert_ms2mml(xml: &str, settings: Option<ConversionSettings>) -> ConversionResult {
    let settings = settings.unwrap_or_default();

    match try_convert(xml, &settings) {
        Ok(converted) => ConversionResult::Converted(converted),
        Err(err) => {
            log::warn!("ms2mml conversion failed: {}", err);
            ConversionResult::Error {
                error: err.to_string(),
            }
        }
    }
}

/// Convert raw uploaded bytes. Invalid UTF-8 sequences are replaced with
/// U+FFFD before parsing rather than rejected.
pub fn convert_ms2mml_bytes(bytes: &[u8], settings: Option<ConversionSettings>) -> ConversionResult {
    let text = String::from_utf8_lossy(bytes);
    convert_ms2mml(&text, settings)
}

fn try_convert(xml: &str, settings: &ConversionSettings) -> Result<IndexMap<String, String>, ConversionError> {
    let fields = extract_ms2mml_fields(xml)?;
    Ok(normalize_fields(&fields, &MmlNormalizer::with_rewrites(settings.rewrites.clone())))
}

/// Normalize every extracted field. The output has exactly one entry per
/// input key, in the same order.
pub fn normalize_fields(fields: &ExtractedFields, normalizer: &MmlNormalizer) -> IndexMap<String, String> {
    fields
        .iter()
        .map(|(key, raw)| (format!("{}{}", CONVERTED_PREFIX, key), normalizer.normalize(raw)))
        .collect()
}
