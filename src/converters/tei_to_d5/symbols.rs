//! Symbol tables for editorial markup
//!
//! Maps attribute values and abbreviation expansions to the Unicode
//! symbols written into D5 lines.

use crate::text::mark_each_char;

/// Generic abbreviation sign for expansions with no dedicated symbol
pub const GENERIC_ABBREVIATION: &str = "\u{2105}";

/// Underdot appended to every letter of unclear text
pub const UNDERDOT: &str = "\u{323}";

/// Placeholder for missing text of unknown extent
pub const UNKNOWN_EXTENT: &str = "[?]";

/// Arrows marking where an addition was written
pub mod arrows {
    pub const ABOVE: &str = "\u{2191}";
    pub const BELOW: &str = "\u{2193}";
    pub const LEFT: &str = "\u{2190}";
    pub const RIGHT: &str = "\u{2192}";
    pub const MARGIN: &str = "\u{2194}";
    pub const BOTTOM: &str = "\u{21A1}";
    pub const TOP: &str = "\u{219F}";
}

/// Symbol for an abbreviation, keyed by the first five letters of its
/// normalized expansion
pub fn abbreviation_symbol(expansion: &str) -> &'static str {
    let key: String = expansion.chars().take(5).collect();
    match key.as_str() {
        // year
        "ΕΤΟΥΣ" | "ΕΤΟΣ" | "ΕΤΩΝ" | "ΕΤΕΣΙ" => "\u{10179}",
        // measures
        "ΑΡΟΥΡ" => "\u{10187}",
        "ΑΡΤΑΒ" => "\u{10186}",
        "ΧΟΙΝΙ" => "\u{E674}",
        "ΞΕΣΤΗ" | "ΞΕΣΤΟ" | "ΞΕΣΤΩ" => "\u{10185}",
        "ΛΙΤΡΑ" | "ΛΙΤΡΩ" => "\u{10183}",
        "ΟΥΓΚΙ" => "\u{10184}",
        "ΜΕΤΡΕ" | "ΜΕΤΡΟ" => "\u{E63D}",
        // numbers and fractions
        "ΤΡΙΤΟ" => "\u{2C85}",
        "ΤΕΤΑΡ" => "\u{E606}",
        "ΗΜΙΣΥ" => "\u{10175}",
        // money
        "ΔΡΑΧΜ" => "\u{1017B}",
        "ΟΒΟΛΟ" => "\u{1017C}",
        "ΔΙΩΒΟ" => "\u{1017D}",
        "ΤΡΙΩΒ" => "\u{1017E}",
        "ΤΕΤΡΩ" => "\u{1017F}",
        "ΠΕΝΤΩ" => "\u{10180}",
        "ΗΜΙΩΒ" | "ΗΜΙΟΒ" => "\u{E675}",
        "ΧΑΛΚΟ" => "\u{2CAC}",
        "ΔΙΧΑΛ" => "\u{2CAD}",
        "ΚΕΡΑΤ" => "\u{E67D}",
        "ΤΑΛΑΝ" => "\u{1017A}",
        "ΔΗΝΑΡ" => "\u{E6A3}",
        "ΝΟΜΙΣ" => "\u{E696}",
        "ΜΥΡΙΑ" => "\u{E616}",
        // wheat
        "ΠΥΡΟΥ" | "ΠΥΡΩ" | "ΠΥΡΩΙ" | "ΠΥΡΟΝ" | "ΠΥΡΟΣ" => "\u{E63E}",
        // operators
        "ΓΙΝΟΝ" | "ΓΙΝΕΤ" | "ΓΙΓΝΟ" | "ΓΙΓΝΕ" => "\u{E691}",
        "ΛΟΙΠΩ" | "ΛΟΙΠΟ" => "\u{E613}",
        // monograms
        "ΠΡΟΣ" => "\u{E688}",
        "ΓΡΑΜΜ" => "\u{E689}",
        "ΖΜΥΡΝ" => "\u{E68A}",
        "ΩΡΑ" | "ΩΡΑΣ" => "\u{E68B}",
        "ΜΕΡΙΣ" | "ΜΕΡΙΔ" => "\u{E68C}",
        "ΧΕΙΡΙ" => "\u{E68E}",
        "ΧΡΩ" => "\u{2CE9}",
        // pronouns and formulae
        "ΑΥΤΟΣ" | "ΑΥΤΟΥ" | "ΑΥΤΩ" | "ΑΥΤΩΙ" | "ΑΥΤΟΝ" | "ΑΥΤΟΙ" | "ΑΥΤΩΝ" | "ΑΥΤΗ" | "ΑΥΤΗΣ"
        | "ΑΥΤΗΙ" | "ΑΥΤΗΝ" | "ΑΥΤΑΙ" | "ΑΥΤΑΣ" => "\u{E632}",
        "ΧΑΙΡΕ" => "\u{E687}",
        "ΥΠΕΡ" => "\u{E67A}",
        "ΟΜΟΥ" => "\u{E670}",
        "ΙΝΔΙΚ" | "ΔΙΜΟΙ" => "\u{E698}",
        _ => GENERIC_ABBREVIATION,
    }
}

/// Symbol sequence for a `<g type="...">`, `None` for unknown types
pub fn glyph_symbol(glyph_type: &str) -> Option<&'static str> {
    let symbol = match glyph_type {
        "anti-sigma" | "antisigma" => "\u{37B}",
        "antisigma-periestigmene" => "\u{37D}",
        "apostrophe" => "\u{27}",
        "asteriskos" => "\u{2A}",
        "backslash" => "\u{FE68}",
        "backtick" => "\u{2E0C}",
        "brevis" => "\u{2D8}",
        "center-brace-closing" => "\u{23AC}",
        "check" => "\u{2044}",
        "chi-periestigmenon" => "\u{B7}\u{3A7}\u{B7}",
        "chirho" => "\u{2627}",
        "coronis" => "\u{2E0E}",
        "coronis-lower-half" => "\u{F0224}",
        "cross" => "\u{271D}",
        "dagger" | "stauros" => "\u{2020}",
        "dash" => "\u{2012}",
        "dicolon" => "\u{3A}",
        "di-punctus" | "dipunct" => "\u{205A}",
        "diastole" => "\u{2BC}",
        "diple" => "\u{FE65}",
        "diple-obelismene" => "\u{291A}",
        "diple-periestigmene" => "\u{2E16}",
        "dot" => "\u{2E31}",
        "dotted-obelos" | "obelos-periestigmenos" => "\u{2E13}",
        "double-horizontal-bar" => "\u{305}\u{332}",
        "double-slanting-stroke" => "\u{2F}\u{2F}",
        "double-vertical-bar" => "\u{2016}",
        "downwards-ancora" | "upwards-ancora" => "\u{2E15}",
        "filled-circle" => "\u{29BF}",
        "filler" => "\u{7DF}",
        "hedera" => "\u{2766}",
        // misspellings found in published files
        "high-punctus" | "high-puctus" | "high-puncuts" | "hight-punctus" => "\u{387}",
        "hyphen" => "\u{2010}",
        "hypodiastole" => "\u{2E12}",
        "long-vertical-bar" => "\u{7C}",
        "low-punctus" => "\u{FE52}",
        "lower-brace-closing" => "\u{23AD}",
        "lower-brace-opening" => "\u{23A9}",
        "middot" | "middod" => "\u{B7}",
        "obelos" => "\u{2015}",
        "parens-deletion-closing" | "parens-punctuation-closing" => "\u{23AC}",
        "parens-deletion-opening" | "parens-punctuation-opening" | "parent-punctuation-opening" => {
            "\u{23A8}"
        }
        "parens-lower-closing" => "\u{23A0}",
        "parens-lower-opening" => "\u{239D}",
        "parens-middle-closing" => "\u{239F}",
        "parens-middle-opening" => "\u{239C}",
        "parens-upper-closing" => "\u{239E}",
        "parens-upper-opening" => "\u{239B}",
        "percent" => "\u{25}",
        "reverse-dotted-obelos" => "\u{B7}\u{5C}\u{B7}",
        "rho-cross" => "\u{2CE8}",
        "s-etous" => "\u{10179}",
        "short-vertical-bar" => "\u{E197}",
        "sinusoid-stroke" => "\u{E0E7}",
        "slanting-stroke" => "\u{2F}",
        "slashed-N" => "\u{203E}",
        "swungdash" | "tilde" => "\u{7E}",
        "tetrapunct" => "\u{2058}",
        "tripunct" => "\u{22EE}",
        "upper-brace-closing" => "\u{23AB}",
        "upper-brace-opening" => "\u{23A7}",
        "upward-pointing-arrowhead" => "\u{2197}",
        "x" => "\u{4E}",
        "xs" => "\u{4E}\u{4E}\u{4E}",
        _ => return None,
    };
    Some(symbol)
}

/// Line break plus symbol for a `<milestone rend="...">`, `None` for unknown renditions
pub fn milestone_symbol(rend: &str) -> Option<&'static str> {
    match rend {
        "paragraphos" => Some("\u{2E0F}"),
        "horizontal-rule" => Some("\u{2015}"),
        "diple-obelismene" => Some("\u{2E10}"),
        "wavy-line" => Some("\u{223C}"),
        "coronis" => Some("\u{2E0E}"),
        _ => None,
    }
}

/// How a `<hi rend="...">` marks its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendition {
    /// One combining mark after the whole text
    Diacritic(&'static str),
    /// Combining mark(s) after every character
    WholeWord(&'static str),
}

impl Rendition {
    pub fn from_rend(rend: &str) -> Option<Self> {
        let rendition = match rend {
            "diaeresis" => Rendition::Diacritic("\u{308}"),
            "asper" => Rendition::Diacritic("\u{314}"),
            "acute" => Rendition::Diacritic("\u{301}"),
            "circumflex" => Rendition::Diacritic("\u{342}"),
            "grave" => Rendition::Diacritic("\u{300}"),
            "lenis" => Rendition::Diacritic("\u{313}"),
            "overdot" => Rendition::Diacritic("\u{307}"),
            "underline" | "underlined" => Rendition::WholeWord("\u{332}"),
            "supraline" => Rendition::WholeWord("\u{305}"),
            "supraline-underline" => Rendition::WholeWord("\u{305}\u{332}"),
            _ => return None,
        };
        Some(rendition)
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Rendition::Diacritic(mark) => format!("{}{}", text, mark),
            Rendition::WholeWord(mark) => mark_each_char(text, mark),
        }
    }
}

/// Apply a rendition by name; unknown or missing renditions leave the text unchanged
pub fn render(rend: Option<&str>, text: &str) -> String {
    match rend.and_then(Rendition::from_rend) {
        Some(rendition) => rendition.apply(text),
        None => text.to_string(),
    }
}
