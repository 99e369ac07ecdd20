//! Format converters
//!
//! This module contains converters from input notation formats to MML.

pub mod ms2mml;

// Re-export for convenience
pub use ms2mml::{
    convert_ms2mml,
    convert_ms2mml_bytes,
    ConversionError,
    ConversionResult,
    ConversionSettings,
    ParseError,
};
