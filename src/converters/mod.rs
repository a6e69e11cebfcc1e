//! Format converters
//!
//! This module contains converters from transcription markup to D5 text.

pub mod tei_to_d5;

// Re-export for convenience
pub use tei_to_d5::{
    convert_file, convert_tei_to_d5, ConversionError, ConversionResult, ConversionSettings,
};
