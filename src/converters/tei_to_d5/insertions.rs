//! Splicing of deferred insertions
//!
//! Additions written above, below or beside a line become lines of their
//! own. The transformer hands them over with the line they were found on;
//! this module places them.

use crate::converters::tei_to_d5::types::{InsertionSide, RawLine};
use crate::formatter::format_line;

/// Flatten raw lines into text lines with every insertion spliced in
///
/// Insertions before line `i` land at `i`, insertions after it at `i + 1`.
/// Several "before" insertions on one line are taken in reverse so that
/// they read top to bottom once placed. Targets are shifted by the number
/// of lines already inserted; targets past the end append.
pub fn resolve_insertions(lines: Vec<RawLine>) -> Vec<String> {
    let mut pending: Vec<(usize, String)> = Vec::new();
    let mut output = Vec::with_capacity(lines.len());

    for (index, line) in lines.into_iter().enumerate() {
        let (before, after): (Vec<_>, Vec<_>) = line
            .insertions
            .into_iter()
            .partition(|insertion| insertion.side == InsertionSide::Before);
        pending.extend(before.into_iter().rev().map(|insertion| (index, insertion.text)));
        pending.extend(after.into_iter().map(|insertion| (index + 1, insertion.text)));
        output.push(line.text);
    }

    for (shift, (target, text)) in pending.into_iter().enumerate() {
        let at = (target + shift).min(output.len());
        log::debug!("Inserting {:?} at line {}", text, at);
        output.insert(at, format_line(&text));
    }

    output
}
