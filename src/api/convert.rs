//! ms2mml conversion entry points for the WASM API
//!
//! Conversion errors travel in-band: a malformed document still returns
//! `Ok` with `{"converted": {"error": "..."}}`. Only a bad settings string
//! or a serialization failure raises a JavaScript exception.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_settings_json, to_json};
use crate::converters::ms2mml::{ConversionResult, ConversionSettings};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Response envelope returned to JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertResponse {
    pub converted: ConversionResult,
}

/// Convert an uploaded ms2mml file to MML fields
///
/// # Arguments
/// * `bytes` - Raw file contents. Invalid UTF-8 is replaced, never rejected.
/// * `settings_json` - Optional ConversionSettings as JSON
///
/// # Returns
/// JSON string `{"converted": {"converted_melody": "...", "converted_chord_1": "...", ...}}`
/// or `{"converted": {"error": "XML Parse Error: ..."}}`
///
/// # Example Settings JSON
/// ```json
/// { "rewrites": ["uppercase_velocity"] }
/// ```
#[wasm_bindgen(js_name = convertMs2mml)]
pub fn convert_ms2mml(bytes: &[u8], settings_json: Option<String>) -> Result<String, JsValue> {
    wasm_info!("convertMs2mml called ({} bytes)", bytes.len());

    let text = String::from_utf8_lossy(bytes);
    convert_ms2mml_text(text.into_owned(), settings_json)
}

/// Convert an already-decoded ms2mml document to MML fields
///
/// Same response shape as `convertMs2mml`.
#[wasm_bindgen(js_name = convertMs2mmlText)]
pub fn convert_ms2mml_text(text: String, settings_json: Option<String>) -> Result<String, JsValue> {
    let response = build_response(&text, settings_json.as_deref())
        .map_err(|e| {
            wasm_error!("{}", e);
            JsValue::from_str(&e)
        })?;

    match response.converted.error_message() {
        Some(message) => wasm_warn!("ms2mml conversion returned error: {}", message),
        None => wasm_log!("  Converted {} fields", response.converted.len()),
    }

    let json = to_json(&response, "Result serialization error")
        .map_err(|e| {
            wasm_error!("{}", e);
            JsValue::from_str(&e)
        })?;
    wasm_info!("convertMs2mml completed: {} bytes of JSON", json.len());

    Ok(json)
}

/// Parse settings and run the conversion without touching the JS console
pub fn build_response(text: &str, settings_json: Option<&str>) -> Result<ConvertResponse, String> {
    let settings: Option<ConversionSettings> = parse_settings_json(settings_json)?;
    let converted = crate::converters::ms2mml::convert_ms2mml(text, settings);

    Ok(ConvertResponse { converted })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_response_wraps_converted_fields() {
        let response = build_response("<ms2><melody>c\nd</melody></ms2>", None).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"converted":{"converted_melody":"cd"}}"#);
    }

    #[test]
    fn test_build_response_keeps_parse_error_in_band() {
        let response = build_response("<notxml", None).unwrap();
        assert!(response.converted.is_error());

        let value = serde_json::to_value(&response).unwrap();
        let error = value["converted"]["error"].as_str().unwrap();
        assert!(error.contains("XML Parse Error"));
    }

    #[test]
    fn test_build_response_applies_settings() {
        let response = build_response(
            "<ms2><melody>v3c</melody></ms2>",
            Some(r#"{"rewrites":["uppercase_velocity"]}"#),
        )
        .unwrap();
        assert_eq!(response.converted.get("converted_melody"), Some("V3c"));
    }

    #[test]
    fn test_build_response_rejects_bad_settings() {
        let err = build_response("<ms2/>", Some("not json")).unwrap_err();
        assert!(err.starts_with("Settings parse error"));
    }
}
