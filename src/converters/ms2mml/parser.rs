//! XML parsing layer for ms2mml documents
//!
//! Wraps roxmltree and pulls the voice parts out of the document root.
//! Only the root's direct children are looked at; nested elements with
//! the same names are ignored.

use roxmltree::{Document, Node, ParsingOptions};

use crate::converters::ms2mml::errors::ParseError;
use crate::converters::ms2mml::types::ExtractedFields;

// ============================================================================
// FIELD DESCRIPTIONS
// ============================================================================

/// How a tag maps onto extracted fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// At most one field, keyed by the tag name. The first matching child
    /// is used; the field is present even when the tag is absent.
    Singleton,

    /// One field per matching child, keyed `<tag>_<attribute value>`.
    /// `missing_key` stands in for the value when the attribute is absent.
    Repeated {
        key_attribute: &'static str,
        missing_key: &'static str,
    },
}

/// Declarative description of one extracted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub tag: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn singleton(tag: &'static str) -> Self {
        Self {
            tag,
            kind: FieldKind::Singleton,
        }
    }

    pub const fn repeated(tag: &'static str, key_attribute: &'static str, missing_key: &'static str) -> Self {
        Self {
            tag,
            kind: FieldKind::Repeated {
                key_attribute,
                missing_key,
            },
        }
    }
}

/// Fields of an ms2mml document: one melody, any number of indexed chords
pub const MS2MML_FIELDS: &[FieldSpec] = &[
    FieldSpec::singleton("melody"),
    FieldSpec::repeated("chord", "index", "unknown"),
];

// ============================================================================
// XML DOCUMENT WRAPPER
// ============================================================================

/// Wrapper around roxmltree::Document for ms2mml parsing
pub struct XmlDocument<'input> {
    doc: Document<'input>,
}

impl<'input> XmlDocument<'input> {
    /// Parse XML string into XmlDocument.
    ///
    /// DOCTYPE declarations are accepted; anything that is not a single
    /// well-formed document is rejected with [`ParseError::InvalidXml`].
    pub fn parse(xml: &'input str) -> Result<Self, ParseError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let doc = Document::parse_with_options(xml, options)?;
        Ok(XmlDocument { doc })
    }

    /// Name of the root element
    pub fn root_name(&self) -> &str {
        self.doc.root_element().tag_name().name()
    }

    /// Extract fields described by `specs` from the root's direct children.
    ///
    /// Singleton fields are inserted first, in `specs` order. Repeated
    /// fields follow in document order.
    pub fn extract_fields(&self, specs: &[FieldSpec]) -> ExtractedFields {
        let root = self.doc.root_element();
        let mut fields = ExtractedFields::new();

        for spec in specs.iter().filter(|s| s.kind == FieldKind::Singleton) {
            let text = get_child(root, spec.tag).map(get_text).unwrap_or_default();
            fields.insert(spec.tag, text);
        }

        for child in root.children().filter(Node::is_element) {
            for spec in specs {
                let FieldKind::Repeated { key_attribute, missing_key } = spec.kind else {
                    continue;
                };
                if !is_plain_tag(child, spec.tag) {
                    continue;
                }

                let key_value = child.attribute(key_attribute).unwrap_or(missing_key);
                let key = format!("{}_{}", spec.tag, key_value);
                if fields.insert(key.as_str(), get_text(child)).is_some() {
                    log::warn!("duplicate <{} {}=\"{}\">, keeping the later one", spec.tag, key_attribute, key_value);
                }
            }
        }

        log::debug!("extracted {} fields from <{}>", fields.len(), self.root_name());
        fields
    }
}

/// Parse `xml` and extract the ms2mml voice parts
pub fn extract_ms2mml_fields(xml: &str) -> Result<ExtractedFields, ParseError> {
    let doc = XmlDocument::parse(xml)?;
    Ok(doc.extract_fields(MS2MML_FIELDS))
}

// ============================================================================
// HELPERS
// ============================================================================

/// Element with the given name and no namespace. `<a:melody>` and
/// elements under a default `xmlns` do not match `melody`.
fn is_plain_tag(node: Node, tag: &str) -> bool {
    let name = node.tag_name();
    node.is_element() && name.name() == tag && name.namespace().is_none()
}

/// First direct child element with the given tag name
fn get_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_plain_tag(*n, tag))
}

/// Text preceding the element's first child element, or "".
/// Comments and processing instructions are skipped; the text around
/// them is joined.
fn get_text(node: Node) -> String {
    node.children()
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
