//! EpiDoc to D5 WASM Module
//!
//! Converts EpiDoc/TEI transcriptions of papyri and inscriptions into the
//! normalized D5 line format used for text analysis and search.

pub mod api;
pub mod converters;
pub mod diagnostics;
pub mod formatter;
pub mod renderers;
pub mod text;

// Re-export commonly used types
pub use converters::tei_to_d5::{
    convert_file, convert_tei_to_d5, ConversionError, ConversionResult, ConversionSettings,
    ParseError, SkippedElement, TextBlock,
};
pub use diagnostics::{
    CorrectionRecord, Diagnostic, DiagnosticKind, DiagnosticSeverity, FormatterState,
};
pub use formatter::{format_line, validate_line, FormatError};
pub use text::majuscule::normalize;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second start (e.g. module re-instantiation) finds the logger already set
    #[cfg(feature = "console_log")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }

    log::info!("EpiDoc D5 WASM module initialized");
}
