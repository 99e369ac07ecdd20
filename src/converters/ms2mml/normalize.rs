//! MML text normalization
//!
//! Turns the raw text of one voice part into a single line: line feeds and
//! carriage returns are deleted (not replaced), then surrounding whitespace
//! is trimmed. Notation-specific substitutions hook in afterwards through
//! [`MmlRewrite`]; none run unless configured.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Lowercase velocity marker, e.g. `v12`
    static ref RE_VELOCITY: Regex = Regex::new(r"v(\d+)").unwrap();
}

/// A notation substitution applied after line-break removal.
///
/// Every rewrite must be idempotent: applying it to its own output
/// leaves the text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MmlRewrite {
    /// `v<digits>` becomes `V<digits>`
    UppercaseVelocity,
}

impl MmlRewrite {
    pub fn apply(&self, text: &str) -> String {
        match self {
            MmlRewrite::UppercaseVelocity => RE_VELOCITY.replace_all(text, "V$1").into_owned(),
        }
    }
}

/// Normalizer with an ordered list of rewrites
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MmlNormalizer {
    rewrites: Vec<MmlRewrite>,
}

impl MmlNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rewrites(rewrites: Vec<MmlRewrite>) -> Self {
        Self { rewrites }
    }

    pub fn rewrites(&self) -> &[MmlRewrite] {
        &self.rewrites
    }

    /// Normalize one raw text field. Total over all inputs.
    pub fn normalize(&self, text: &str) -> String {
        let base = normalize_mml_text(text);
        self.rewrites
            .iter()
            .fold(base, |acc, rewrite| rewrite.apply(&acc))
    }
}

/// Delete every `\n` and `\r`, then trim leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use ms2mml_wasm::converters::ms2mml::normalize_mml_text;
///
/// assert_eq!(normalize_mml_text("  C4\nD4\r\nE4  "), "C4D4E4");
/// assert_eq!(normalize_mml_text("\r\n \n"), "");
/// ```
pub fn normalize_mml_text(text: &str) -> String {
    let joined: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    joined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_line_breaks_without_separator() {
        assert_eq!(normalize_mml_text("C4\nD4\r\nE4"), "C4D4E4");
        assert_eq!(normalize_mml_text("a\rb"), "ab");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_mml_text("\n   t120 l8 cde  \n"), "t120 l8 cde");
    }

    #[test]
    fn test_inner_spaces_kept() {
        assert_eq!(normalize_mml_text("C E G"), "C E G");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(normalize_mml_text(""), "");
        assert_eq!(normalize_mml_text("\n\r\n \t "), "");
    }

    #[test]
    fn test_indentation_after_line_break_survives_join() {
        // Only line breaks are removed; indentation of continuation lines stays.
        assert_eq!(normalize_mml_text("cde\n    fga"), "cde    fga");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = ["", "abc", "C E G", "t120 v10 o4 c8", "  x\ny \r"];
        for sample in samples {
            let once = normalize_mml_text(sample);
            assert_eq!(normalize_mml_text(&once), once, "input {:?}", sample);
        }
    }

    #[test]
    fn test_default_normalizer_has_no_rewrites() {
        let normalizer = MmlNormalizer::new();
        assert!(normalizer.rewrites().is_empty());
        assert_eq!(normalizer.normalize(" v12c\n"), "v12c");
    }

    #[test]
    fn test_uppercase_velocity_rewrite() {
        let normalizer = MmlNormalizer::with_rewrites(vec![MmlRewrite::UppercaseVelocity]);
        assert_eq!(normalizer.normalize("v12c\nv8d"), "V12cV8d");
        // No digits, no rewrite
        assert_eq!(normalizer.normalize("v c"), "v c");
    }

    #[test]
    fn test_uppercase_velocity_is_idempotent() {
        let rewrite = MmlRewrite::UppercaseVelocity;
        let once = rewrite.apply("t120v15cdev3");
        assert_eq!(once, "t120V15cdeV3");
        assert_eq!(rewrite.apply(&once), once);
    }

    #[test]
    fn test_rewrite_deserializes_from_snake_case() {
        let rewrite: MmlRewrite = serde_json::from_str("\"uppercase_velocity\"").unwrap();
        assert_eq!(rewrite, MmlRewrite::UppercaseVelocity);
    }
}
