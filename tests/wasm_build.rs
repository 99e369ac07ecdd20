//! WASM build test
//!
//! Exercises the JavaScript-facing conversion entry points in a browser.

#![cfg(target_arch = "wasm32")]

use ms2mml_wasm::api::{convert_ms2mml, convert_ms2mml_text};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_convert_uploaded_bytes() {
    let bytes = b"<song><melody>C4\nD4</melody><chord index=\"1\">C E G</chord></song>";
    let json = convert_ms2mml(bytes, None).unwrap();

    assert_eq!(
        json,
        r#"{"converted":{"converted_melody":"C4D4","converted_chord_1":"C E G"}}"#
    );
}

#[wasm_bindgen_test]
fn test_parse_error_is_not_an_exception() {
    let json = convert_ms2mml_text("<notxml".to_string(), None).unwrap();
    assert!(json.contains("XML Parse Error"));
}

#[wasm_bindgen_test]
fn test_bad_settings_raise() {
    let result = convert_ms2mml_text("<song/>".to_string(), Some("{".to_string()));
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_start_hook_tolerates_second_init() {
    // The start hook already ran when the module loaded; running it again
    // finds a logger installed and must not panic.
    ms2mml_wasm::main();
    let json = convert_ms2mml_text("<song/>".to_string(), None).unwrap();
    assert_eq!(json, r#"{"converted":{"converted_melody":""}}"#);
}
