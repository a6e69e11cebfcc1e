//! Line normalization
//!
//! Collapses the gap notation produced by the converter so that every
//! stretch of missing text is written once, with a single bracket pair.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref LEADING_VACAT: Regex = Regex::new(r"^(?:\? )+").expect("valid regex");
    static ref TRAILING_VACAT: Regex = Regex::new(r"(?: \?)+$").expect("valid regex");
    static ref GAP_NOTATION_ONLY: Regex = Regex::new(r"^[\[\]\-?]+$").expect("valid regex");
    static ref BRACKETED_DASHES: Regex = Regex::new(r"\[-+\]").expect("valid regex");
    static ref LEADING_GAPS: Regex = Regex::new(r"^(?:\[-+\]|\[\?\])+").expect("valid regex");
    static ref TRAILING_GAPS: Regex = Regex::new(r"(?:\[-+\]|\[\?\])+$").expect("valid regex");
    static ref ADJACENT_GAPS: Regex = Regex::new(r"(?:\[-+\]){2,}").expect("valid regex");
    static ref PLACEHOLDER_WITH_GAPS: Regex =
        Regex::new(r"(?:\[-+\])*\[\?\](?:\[-+\])*").expect("valid regex");
    static ref REPEATED_PLACEHOLDERS: Regex = Regex::new(r"(?:\[\?\]){2,}").expect("valid regex");
    static ref REPEATED_CARE_OF: Regex = Regex::new("\u{2105}+").expect("valid regex");
}

/// Invisible bidi isolate that leaks in from some source files
const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';

/// Upper bound on normalization passes
const MAX_FORMAT_PASSES: usize = 8;

/// Format one raw line into D5 form
///
/// Deterministic and idempotent. Returns an empty string when the line
/// holds nothing but gap notation.
pub fn format_line(line: &str) -> String {
    log::debug!("format_line: received {:?}", line);

    let mut line: String = line.chars().filter(|c| *c != POP_DIRECTIONAL_ISOLATE).collect();
    // Removing padding or empty brackets can expose more of either
    for _ in 0..MAX_FORMAT_PASSES {
        let next = format_pass(&line);
        if next == line {
            break;
        }
        line = next;
    }

    log::debug!("format_line: returns {:?}", line);
    line
}

fn format_pass(line: &str) -> String {
    let line = strip_padding(line);
    if is_gap_only(&line) {
        return String::new();
    }

    let line = line.replace("[]", "");
    if is_gap_only(&line) {
        return String::new();
    }

    let line = LEADING_GAPS.replace(&line, "]");
    let line = TRAILING_GAPS.replace(&line, "[");
    let line = ADJACENT_GAPS.replace_all(&line, |caps: &Captures| {
        let dashes = caps[0].matches('-').count();
        format!("[{}]", "-".repeat(dashes))
    });
    let line = PLACEHOLDER_WITH_GAPS.replace_all(&line, "[?]");
    let line = REPEATED_PLACEHOLDERS.replace_all(&line, "[?]");
    let line = REPEATED_CARE_OF.replace_all(&line, "\u{2105}");
    line.to_uppercase()
}

/// Trim whitespace and `? ` vacat padding at both ends until neither is left
fn strip_padding(line: &str) -> String {
    let mut line = line.trim().to_string();
    loop {
        let stripped = LEADING_VACAT.replace(&line, "");
        let stripped = TRAILING_VACAT.replace(&stripped, "");
        let stripped = stripped.trim();
        if stripped == line {
            return line;
        }
        line = stripped.to_string();
    }
}

/// Nothing but brackets and placeholders; bare dashes mark illegible letters and stay
fn is_gap_only(line: &str) -> bool {
    let gap_only =
        GAP_NOTATION_ONLY.is_match(line) && !BRACKETED_DASHES.replace_all(line, "").contains('-');
    if gap_only {
        log::debug!("format_line: gap-only line {:?} deleted", line);
    }
    gap_only
}
