//! ms2mml Converter WASM API
//!
//! JavaScript-facing entry points. The conversion core is pure; this layer
//! decodes input, parses optional settings JSON, and serializes the result.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros and JSON helpers
//! - `convert`: ms2mml conversion entry points

pub mod helpers;
pub mod convert;

pub use convert::{convert_ms2mml, convert_ms2mml_text, ConvertResponse};
