//! Type definitions for EpiDoc conversion
//!
//! - Public API types (ConversionResult, ConversionSettings, TextBlock)
//! - The intermediate transformer output (Rendered, Fragment, RawLine)
//! - Tag identities (TeiTag)

use crate::diagnostics::FormatterState;
use crate::formatter::CONFUSABLES;
use serde::{Deserialize, Serialize};

// ============================================================================
// PUBLIC API TYPES
// ============================================================================

/// Result of converting one EpiDoc document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Transcribed blocks in document order, empty blocks removed
    pub text_blocks: Vec<TextBlock>,

    /// Diagnostics, corrections and detected languages of this document
    pub state: FormatterState,

    /// Markup that was recognised but has no D5 rendering
    pub unimplemented: Vec<SkippedElement>,
}

impl ConversionResult {
    /// Whether the caller should persist this result
    pub fn is_writable(&self, settings: &ConversionSettings) -> bool {
        !self.state.has_errors() || settings.ignore_formatting_issues
    }

    /// Every line of every block, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text_blocks
            .iter()
            .flat_map(|block| block.lines.iter().map(String::as_str))
    }
}

/// One transcribed `<ab>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// `n` of the enclosing `<div>` (e.g. "r", "v", a fragment number)
    pub n: Option<String>,

    /// `subtype` of the enclosing `<div>` (e.g. "recto", "fragment")
    pub subtype: Option<String>,

    /// Validated lines, never empty
    pub lines: Vec<String>,
}

/// Information about markup that was dropped for lack of a rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedElement {
    /// Element tag name (e.g. "milestone")
    pub element_type: String,

    /// Offending attribute value (e.g. the `rend` of a milestone)
    pub value: Option<String>,

    /// Zero-based index of the `<ab>` the element appears in
    pub block_index: Option<usize>,

    /// Human-readable explanation of why skipped
    pub reason: String,
}

/// Configuration options for conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Record unknown milestone, glyph and rendition values in the result
    pub record_unimplemented: bool,

    /// Treat results with diagnostics as writable
    pub ignore_formatting_issues: bool,

    /// Upper bound on automatic typo correction passes per line
    pub max_correction_passes: usize,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            record_unimplemented: false,
            ignore_formatting_issues: false,
            max_correction_passes: CONFUSABLES.len(),
        }
    }
}

// ============================================================================
// TRANSFORMER OUTPUT
// ============================================================================

/// Which side of its line an insertion lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionSide {
    Before,
    After,
}

/// Text of an `<add>` that becomes a line of its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub side: InsertionSide,
    pub text: String,
}

/// One piece of transformer output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    LineBreak,
    Insertion(Insertion),
}

/// Transformer output for a node or a whole block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    fragments: Vec<Fragment>,
}

impl Rendered {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        let mut rendered = Self::new();
        rendered.push_str(&text.into());
        rendered
    }

    pub fn line_break() -> Self {
        Self { fragments: vec![Fragment::LineBreak] }
    }

    pub fn insertion(side: InsertionSide, text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Insertion(Insertion { side, text: text.into() })],
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(Fragment::Text(last)) => last.push_str(text),
            _ => self.fragments.push(Fragment::Text(text.to_string())),
        }
    }

    pub fn push(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Text(text) => self.push_str(&text),
            other => self.fragments.push(other),
        }
    }

    pub fn append(&mut self, other: Rendered) {
        for fragment in other.fragments {
            self.push(fragment);
        }
    }

    /// Remove plain spaces from text and insertion payloads
    pub fn without_spaces(self) -> Self {
        let fragments = self
            .fragments
            .into_iter()
            .map(|fragment| match fragment {
                Fragment::Text(text) => Fragment::Text(text.replace(' ', "")),
                Fragment::Insertion(Insertion { side, text }) => {
                    Fragment::Insertion(Insertion { side, text: text.replace(' ', "") })
                }
                Fragment::LineBreak => Fragment::LineBreak,
            })
            .filter(|fragment| !matches!(fragment, Fragment::Text(text) if text.is_empty()))
            .collect();
        Self { fragments }
    }

    /// Inline text only, dropping line breaks and insertions
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True when nothing at all was produced
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Split at line breaks, dropping lines that carry nothing
    pub fn into_raw_lines(self) -> Vec<RawLine> {
        let mut lines = Vec::new();
        let mut current = RawLine::default();
        for fragment in self.fragments {
            match fragment {
                Fragment::Text(text) => current.text.push_str(&text),
                Fragment::Insertion(insertion) => current.insertions.push(insertion),
                Fragment::LineBreak => {
                    let line = std::mem::take(&mut current);
                    if !line.is_empty() {
                        lines.push(line);
                    }
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// One not-yet-validated line and the insertions found on it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLine {
    pub text: String,
    pub insertions: Vec<Insertion>,
}

impl RawLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), insertions: Vec::new() }
    }

    pub fn with_insertion(mut self, side: InsertionSide, text: impl Into<String>) -> Self {
        self.insertions.push(Insertion { side, text: text.into() });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.insertions.is_empty()
    }
}

// ============================================================================
// TAGS
// ============================================================================

/// EpiDoc elements the transformer distinguishes, by local name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeiTag {
    LineBreak,
    Regularized,
    Reading,
    Deletion,
    Gap,
    Space,
    Supplied,
    Unclear,
    Milestone,
    Expansion,
    AbbreviationMarker,
    Addition,
    Number,
    Lemma,
    Original,
    Sic,
    Abbreviation,
    Quote,
    Surplus,
    Substitution,
    Glyph,
    Highlight,
    Other,
}

impl TeiTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "lb" => TeiTag::LineBreak,
            "reg" => TeiTag::Regularized,
            "rdg" => TeiTag::Reading,
            "del" => TeiTag::Deletion,
            "gap" => TeiTag::Gap,
            "space" => TeiTag::Space,
            "supplied" => TeiTag::Supplied,
            "unclear" => TeiTag::Unclear,
            "milestone" => TeiTag::Milestone,
            "expan" => TeiTag::Expansion,
            "ex" => TeiTag::AbbreviationMarker,
            "add" => TeiTag::Addition,
            "num" => TeiTag::Number,
            "lem" => TeiTag::Lemma,
            "orig" => TeiTag::Original,
            "sic" => TeiTag::Sic,
            "abbr" => TeiTag::Abbreviation,
            "q" => TeiTag::Quote,
            "surplus" => TeiTag::Surplus,
            "subst" => TeiTag::Substitution,
            "g" => TeiTag::Glyph,
            "hi" => TeiTag::Highlight,
            _ => TeiTag::Other,
        }
    }

    /// Tags rendered from their whole subtree instead of child by child
    pub fn takes_whole_subtree(self) -> bool {
        matches!(
            self,
            TeiTag::Expansion
                | TeiTag::Supplied
                | TeiTag::Substitution
                | TeiTag::Addition
                | TeiTag::Gap
                | TeiTag::Space
                | TeiTag::Highlight
        )
    }
}
