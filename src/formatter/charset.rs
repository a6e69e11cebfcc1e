//! Character classes accepted in D5 output lines
//!
//! A well-formed line is built from the normalized majuscule alphabet, the
//! symbols the converter can emit, dashes for missing letters and the
//! bracket/question-mark gap notation.

use crate::text::output_alphabet;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Paragraphos, horizontal rule, diple obelismene, wavy line
const MILESTONE_CHARS: &[char] = &['\u{2E0F}', '\u{2015}', '\u{2E10}', '\u{223C}'];

/// Abbreviation symbols: measures, money, fractions, operators, monograms
const ABBREVIATION_CHARS: &[char] = &[
    '\u{2C85}', '\u{2CAC}', '\u{2CAD}', '\u{E606}', '\u{E613}', '\u{E616}', '\u{E632}', '\u{E63D}',
    '\u{E63E}', '\u{E670}', '\u{E674}', '\u{E675}', '\u{E67A}', '\u{E67D}', '\u{E687}', '\u{E688}',
    '\u{E689}', '\u{E68A}', '\u{E68B}', '\u{E68C}', '\u{E68E}', '\u{E691}', '\u{E696}', '\u{E698}',
    '\u{E6A3}', '\u{2CE9}', '\u{10175}', '\u{10179}', '\u{1017A}', '\u{1017B}', '\u{1017C}',
    '\u{1017D}', '\u{1017E}', '\u{1017F}', '\u{10180}', '\u{10183}', '\u{10184}', '\u{10185}',
    '\u{10186}', '\u{10187}',
];

/// Addition arrows and the generic abbreviation sign
const ADDITION_CHARS: &[char] = &[
    '\u{2191}', '\u{2193}', '\u{2190}', '\u{2192}', '\u{2194}', '\u{21A1}', '\u{219F}', '\u{2105}',
];

/// Everything the glyph table can produce
const GLYPH_CHARS: &[char] = &[
    '\u{37B}', '\'', '*', '\u{FE68}', '\u{2E0C}', '\u{2044}', '\u{B7}', '\u{3A7}', '\u{2627}',
    '\u{2E0E}', '\u{271D}', '\u{2020}', '\u{2012}', '\u{205A}', '\u{2BC}', '\u{FE65}', '\u{291A}',
    '\u{2E31}', '\u{2E13}', '\u{2E15}', '\u{29BF}', '\u{7DF}', '\u{387}', '\u{2010}', '\u{2E12}',
    '|', '\u{FE52}', '\u{2015}', '\u{23AC}', '\u{23A8}', '\u{23A0}', '\u{239D}', '\u{239F}',
    '\u{239C}', '\u{239E}', '\u{239B}', '%', '\\', '\u{2CE8}', '\u{10179}', '\u{E197}', '\u{E0E7}',
    '/', '\u{203E}', '\u{2058}', '~', '\u{22EE}', '\u{2197}', 'N', '\u{2D8}', '\u{F0224}', ':',
    '\u{305}', '\u{332}', '\u{2016}', '\u{2766}', '\u{23AD}', '\u{23A9}', '\u{23AB}', '\u{23A7}',
    '\u{37D}', '\u{2E16}',
];

/// Combining marks applied by renditions
const RENDITION_CHARS: &[char] = &[
    '\u{308}', '\u{314}', '\u{301}', '\u{342}', '\u{300}', '\u{313}', '\u{307}', '\u{332}',
    '\u{305}',
];

/// Underdot for unclear letters
const UNCLEAR_CHAR: char = '\u{323}';

/// Rho cross, Greek one-half sign, and the vacat space
const OTHER_CHARS: &[char] = &['\u{2CE8}', '\u{10177}', ' '];

/// Gap notation: brackets, missing-letter dash, unknown-extent question mark
const GAP_CHARS: &[char] = &['[', ']', '-', '?'];

fn special_chars() -> impl Iterator<Item = char> {
    MILESTONE_CHARS
        .iter()
        .chain(ABBREVIATION_CHARS)
        .chain(ADDITION_CHARS)
        .chain(GLYPH_CHARS)
        .chain(RENDITION_CHARS)
        .chain(std::iter::once(&UNCLEAR_CHAR))
        .chain(OTHER_CHARS)
        .copied()
}

/// Symbols, output letters and bare dashes: everything outside gap notation
fn plain_chars() -> impl Iterator<Item = char> {
    special_chars()
        .chain(output_alphabet().iter().copied())
        .chain(['-'])
}

/// Regex class body for the given characters
fn class_body(chars: impl Iterator<Item = char>) -> String {
    let mut unique: Vec<char> = chars.collect();
    unique.sort_unstable();
    unique.dedup();
    unique.iter().map(|c| regex::escape(&c.to_string())).collect()
}

lazy_static! {
    static ref ALLOWED_CHARS: HashSet<char> = special_chars()
        .chain(output_alphabet().iter().copied())
        .chain(GAP_CHARS.iter().copied())
        .collect();

    /// `]`? letters-and-symbols `[`?
    static ref PLAIN_LINE: Regex = {
        let plain = class_body(plain_chars());
        Regex::new(&format!(r"^\]?[{plain}]+\[?$")).expect("plain line pattern is valid")
    };

    /// Like [`PLAIN_LINE`] with one interior run that may contain gap notation
    static ref GAPPED_LINE: Regex = {
        let plain = class_body(plain_chars());
        let gapped = class_body(
            special_chars()
                .chain(output_alphabet().iter().copied())
                .chain(GAP_CHARS.iter().copied()),
        );
        Regex::new(&format!(r"^\]?[{plain}]+[{gapped}]*[{plain}]+\[?$"))
            .expect("gapped line pattern is valid")
    };
}

/// Whether `c` may appear in a D5 line
pub fn is_allowed(c: char) -> bool {
    ALLOWED_CHARS.contains(&c)
}

/// Whether the line has one of the two well-formed shapes
pub fn is_well_formed(line: &str) -> bool {
    PLAIN_LINE.is_match(line) || GAPPED_LINE.is_match(line)
}

/// Characters of `line` outside the allowed class, in order, duplicates kept
pub fn forbidden_chars(line: &str) -> Vec<char> {
    line.chars().filter(|c| !is_allowed(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_gapped_shapes() {
        assert!(is_well_formed("ΑΒΓ"));
        assert!(is_well_formed("]ΑΒΓ["));
        assert!(is_well_formed("Α---Β"));
        assert!(is_well_formed("Α[?]Β"));
        assert!(is_well_formed("Α[-------]Β"));
        assert!(is_well_formed("Α ? Β"));
        assert!(is_well_formed("ΑΓ\u{305}Β"));
    }

    #[test]
    fn test_malformed_shapes() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("[Α"));
        assert!(!is_well_formed("Α]"));
        assert!(!is_well_formed("ΑB"));
        assert!(!is_well_formed("[?]"));
    }

    #[test]
    fn test_forbidden_chars_keep_order_and_duplicates() {
        assert_eq!(forbidden_chars("ΑΒΓΔΕΦ093[]"), vec!['0', '9', '3']);
        assert_eq!(forbidden_chars("AΑA"), vec!['A', 'A']);
        assert!(forbidden_chars("Α\u{10179}⸏").is_empty());
    }

    #[test]
    fn test_latin_n_is_a_glyph() {
        assert!(is_allowed('N'));
        assert!(!is_allowed('M'));
    }
}
