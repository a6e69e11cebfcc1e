//! Line validation with automatic typo correction
//!
//! Greek transcriptions regularly contain Latin capitals that look exactly
//! like their Greek counterparts. In documents that are Greek only, those
//! are substituted and the line is validated again until it is stable.

use super::charset::{forbidden_chars, is_well_formed};
use super::FormatError;
use crate::diagnostics::{CorrectionRecord, Diagnostic, FormatterState};

/// Latin capitals and the Greek capitals they are visually identical to
pub const CONFUSABLES: [(char, char); 14] = [
    ('A', 'Α'),
    ('B', 'Β'),
    ('E', 'Ε'),
    ('H', 'Η'),
    ('I', 'Ι'),
    ('K', 'Κ'),
    ('M', 'Μ'),
    ('N', 'Ν'),
    ('O', 'Ο'),
    ('P', 'Ρ'),
    ('T', 'Τ'),
    ('X', 'Χ'),
    ('Y', 'Υ'),
    ('Z', 'Ζ'),
];

fn greek_confusable(c: char) -> Option<char> {
    CONFUSABLES
        .iter()
        .find(|(latin, _)| *latin == c)
        .map(|(_, greek)| *greek)
}

/// Validate a formatted line, correcting Latin look-alikes where safe
///
/// Uses the size of the confusables table as the bound on correction passes.
pub fn validate_line(line: &str, state: &mut FormatterState) -> Result<String, FormatError> {
    validate_line_bounded(line, state, CONFUSABLES.len())
}

/// Validate a formatted line with an explicit bound on correction passes
///
/// Diagnostics are appended to `state.errors`. A successful correction
/// drops the diagnostics this call produced for the uncorrected line;
/// diagnostics of earlier lines are never touched.
pub fn validate_line_bounded(
    line: &str,
    state: &mut FormatterState,
    max_passes: usize,
) -> Result<String, FormatError> {
    log::debug!("validate_line: received {:?}", line);

    let checkpoint = state.errors.len();
    let mut line = line.to_string();
    let mut passes = 0;

    while !is_well_formed(&line) {
        let forbidden = forbidden_chars(&line);
        if forbidden.is_empty() {
            log::warn!("validate_line: invalid gap handling: {}", line);
            state.add(Diagnostic::gap_handling(&line));
            break;
        }

        log::warn!("validate_line: forbidden character(s) {:?} found in {:?}", forbidden, line);
        state.add(Diagnostic::forbidden_characters(&line, forbidden.clone()));

        if !state.is_greek_only() {
            break;
        }

        let mut corrections = Vec::new();
        for c in forbidden {
            let Some(greek) = greek_confusable(c) else {
                continue;
            };
            if !line.contains(c) {
                continue;
            }
            line = line.replace(c, &greek.to_string());
            let record = CorrectionRecord { from: c, to: greek, line: line.clone() };
            log::info!("{}", record);
            corrections.push(record);
        }

        if corrections.is_empty() {
            break;
        }

        passes += 1;
        if passes > max_passes {
            return Err(FormatError::CorrectionDiverged { line, passes });
        }
        state.errors.truncate(checkpoint);
        state.changes.push(corrections);
    }

    if line.contains("[]") {
        log::warn!("validate_line: contains \"[]\": {}", line);
        state.add(Diagnostic::residual_markup(&line));
    }

    log::debug!("validate_line: returns {:?}", line);
    Ok(line)
}
