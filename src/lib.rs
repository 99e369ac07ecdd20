//! ms2mml Converter WASM Module
//!
//! Converts ms2mml documents (XML with melody and chord voice parts) into
//! single-line MML strings. The conversion core lives in [`converters`];
//! [`api`] exposes it to JavaScript.

pub mod converters;
pub mod api;

// Re-export commonly used types
pub use converters::ms2mml::{
    convert_ms2mml,
    convert_ms2mml_bytes,
    normalize_mml_text,
    ConversionResult,
    ConversionSettings,
    ExtractedFields,
    MmlRewrite,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("ms2mml converter WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    // Fails only when a logger is already installed; keep that one.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("console logger not installed: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
