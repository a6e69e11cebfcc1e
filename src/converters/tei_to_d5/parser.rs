//! XML reading layer for EpiDoc documents
//!
//! Wraps roxmltree: prepares the source text, detects the document's
//! languages and locates the `<ab>` blocks to transcribe.

use crate::converters::tei_to_d5::errors::ParseError;
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::BTreeSet;

/// Namespace bound to the reserved `xml:` prefix
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Language code excluded from detection (used for English metadata)
const ADMINISTRATIVE_LANGUAGE: &str = "en";

// ============================================================================
// SOURCE PREPARATION
// ============================================================================

/// Parse source text into a document tree
///
/// DOCTYPE declarations are accepted in any layout, internal subsets
/// included; external DTDs are never fetched.
pub fn parse_document(source: &str) -> Result<Document<'_>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(source, options)
        .map_err(|e| ParseError::InvalidXml(format!("XML parse error: {}", e)))
}

// ============================================================================
// DOCUMENT STRUCTURE
// ============================================================================

/// An `<ab>` ready for transcription
#[derive(Debug, Clone, Copy)]
pub struct BlockNode<'a, 'input> {
    /// First `<lb>` inside the block; transcription starts after it
    pub first_line_break: Node<'a, 'input>,
    /// Nearest enclosing `<div>`
    pub division: Option<Node<'a, 'input>>,
}

impl<'a, 'input> BlockNode<'a, 'input> {
    pub fn n(&self) -> Option<String> {
        self.division.and_then(|div| div.attribute("n")).map(str::to_string)
    }

    pub fn subtype(&self) -> Option<String> {
        self.division.and_then(|div| div.attribute("subtype")).map(str::to_string)
    }
}

/// Every `<ab>` with at least one `<lb>`, in document order
pub fn find_text_blocks<'a, 'input>(doc: &'a Document<'input>) -> Vec<BlockNode<'a, 'input>> {
    doc.descendants()
        .filter(|n| is_element_named(*n, "ab"))
        .filter_map(|ab| {
            let first_line_break = ab.descendants().find(|n| is_element_named(*n, "lb"))?;
            let division = ab.ancestors().find(|n| is_element_named(*n, "div"));
            Some(BlockNode { first_line_break, division })
        })
        .collect()
}

/// All `xml:lang` values except English, sorted and deduplicated
pub fn detect_languages(doc: &Document) -> BTreeSet<String> {
    doc.descendants()
        .filter(|n| n.is_element())
        .filter_map(|n| n.attribute((XML_NAMESPACE, "lang")))
        .filter(|lang| *lang != ADMINISTRATIVE_LANGUAGE)
        .map(str::to_string)
        .collect()
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// True for an element with the given local name
pub fn is_element_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenated text of all descendant text nodes
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text a reader sees on the support: like [`text_content`] but without
/// regularized readings and apparatus variants
pub fn reading_text(node: Node) -> String {
    let mut text = String::new();
    collect_reading_text(node, &mut text);
    text
}

fn collect_reading_text(node: Node, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.text().unwrap_or(""));
        } else if child.is_element() && !matches!(child.tag_name().name(), "reg" | "rdg") {
            collect_reading_text(child, out);
        }
    }
}

/// Largest character count a gap or space may claim
pub const MAX_EXTENT: usize = 5000;

/// Attribute parsed as a non-negative count no larger than [`MAX_EXTENT`]
pub fn count_attribute(node: Node, name: &str) -> Option<usize> {
    let count: usize = node.attribute(name)?.trim().parse().ok()?;
    (count <= MAX_EXTENT).then_some(count)
}
