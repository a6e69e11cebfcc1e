//! EpiDoc to D5 converter module
//!
//! Converts EpiDoc/TEI transcriptions into D5 line text: one block per
//! `<ab>`, one validated line per `<lb>`.
//!
//! # Overview
//!
//! The converter follows a four-stage pipeline:
//! 1. **Parse**: Read the EpiDoc document with roxmltree
//! 2. **Transform**: Render each block's nodes to text, line breaks and insertions
//! 3. **Splice**: Place deferred insertions as lines of their own
//! 4. **Validate**: Format every line and check it against the D5 character set
//!
//! Line-level problems never abort a conversion. They are collected in the
//! result's [`FormatterState`](crate::diagnostics::FormatterState).
//!
//! # Basic Usage
//!
//! ```ignore
//! use epidoc_d5::{convert_tei_to_d5, ConversionSettings};
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
//!   <text><body><div type="edition" xml:lang="grc">
//!     <ab><lb n="1"/>καὶ <gap reason="lost" extent="unknown" unit="character"/></ab>
//!   </div></body></text>
//! </TEI>"#;
//!
//! let result = convert_tei_to_d5(xml, None)?;
//! assert_eq!(result.text_blocks[0].lines, vec!["ΚΑΙ["]);
//! ```

pub mod converter;
pub mod errors;
pub mod insertions;
pub mod parser;
pub mod symbols;
pub mod types;

// Re-export main API
pub use errors::{ConversionError, ParseError};
pub use types::{ConversionResult, ConversionSettings, SkippedElement, TextBlock};

use crate::diagnostics::FormatterState;
use crate::formatter::{format_line, validate_line_bounded};
use std::path::Path;

/// Convert an EpiDoc document to D5 text blocks.
///
/// # Arguments
///
/// * `xml` - EpiDoc/TEI document as string
/// * `settings` - Optional conversion settings (uses defaults if None)
///
/// # Returns
///
/// * `Ok(ConversionResult)` - Blocks, diagnostics and unimplemented markup
/// * `Err(ConversionError)` - Fatal error preventing output generation
pub fn convert_tei_to_d5(
    xml: &str,
    settings: Option<ConversionSettings>,
) -> Result<ConversionResult, ConversionError> {
    use converter::{convert_block, ConversionContext};
    use insertions::resolve_insertions;
    use parser::{detect_languages, find_text_blocks, parse_document};

    let settings = settings.unwrap_or_default();

    let doc = parse_document(xml)?;

    let mut state = FormatterState::new(detect_languages(&doc));
    log::debug!("Detected languages: {:?}", state.languages);

    let mut context = ConversionContext::new(&settings);
    let mut text_blocks = Vec::new();

    for (index, block) in find_text_blocks(&doc).into_iter().enumerate() {
        context.current_block = index;

        let rendered = convert_block(block.first_line_break, &mut context);
        let lines = resolve_insertions(rendered.into_raw_lines());

        let mut validated = Vec::with_capacity(lines.len());
        for line in lines {
            let formatted = format_line(&line);
            if formatted.is_empty() {
                continue;
            }
            let line =
                validate_line_bounded(&formatted, &mut state, settings.max_correction_passes)?;
            if !line.is_empty() {
                validated.push(line);
            }
        }

        if validated.is_empty() {
            log::debug!("Block {} produced no lines", index);
            continue;
        }
        text_blocks.push(TextBlock {
            n: block.n(),
            subtype: block.subtype(),
            lines: validated,
        });
    }

    if state.has_errors() {
        log::warn!("Conversion finished with {} diagnostic(s)", state.errors.len());
    }
    log::info!(
        "Converted {} block(s), {} correction pass(es)",
        text_blocks.len(),
        state.changes.len()
    );

    Ok(ConversionResult {
        text_blocks,
        state,
        unimplemented: context.unimplemented,
    })
}

/// Read an EpiDoc file from disk and convert it
pub fn convert_file(
    path: impl AsRef<Path>,
    settings: Option<ConversionSettings>,
) -> Result<ConversionResult, ConversionError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|e| ParseError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::info!("Processing {}", path.display());
    convert_tei_to_d5(&xml, settings)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
