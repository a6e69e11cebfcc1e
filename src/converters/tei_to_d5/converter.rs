//! EpiDoc element conversion logic
//!
//! Turns the nodes of one `<ab>` into [`Rendered`] D5 text: normalized
//! letters, symbols, gap notation, line breaks and deferred insertions.

use crate::converters::tei_to_d5::parser::{count_attribute, reading_text, text_content};
use crate::converters::tei_to_d5::symbols::{
    self, abbreviation_symbol, arrows, glyph_symbol, milestone_symbol, Rendition, UNDERDOT,
    UNKNOWN_EXTENT,
};
use crate::converters::tei_to_d5::types::{
    ConversionSettings, InsertionSide, Rendered, SkippedElement, TeiTag,
};
use crate::text::{average_extent, mark_each_char, normalize};
use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::Node;

lazy_static! {
    static ref BRACKETED_DASHES: Regex = Regex::new(r"\[-+\]").expect("static regex");
}

/// Conversion context that tracks state across blocks
pub struct ConversionContext {
    pub record_unimplemented: bool,
    pub current_block: usize,
    pub unimplemented: Vec<SkippedElement>,
}

impl ConversionContext {
    pub fn new(settings: &ConversionSettings) -> Self {
        Self {
            record_unimplemented: settings.record_unimplemented,
            current_block: 0,
            unimplemented: Vec::new(),
        }
    }

    pub fn add_unimplemented(&mut self, element_type: &str, value: &str, reason: &str) {
        log::debug!("No rendering for <{} {}>: {}", element_type, value, reason);
        if !self.record_unimplemented {
            return;
        }
        self.unimplemented.push(SkippedElement {
            element_type: element_type.to_string(),
            value: Some(value.to_string()),
            block_index: Some(self.current_block),
            reason: reason.to_string(),
        });
    }
}

/// Convert the content following a block's first `<lb>`
pub fn convert_block(first_line_break: Node, context: &mut ConversionContext) -> Rendered {
    let mut rendered = Rendered::new();
    let mut sibling = first_line_break.next_sibling();
    while let Some(node) = sibling {
        if node.is_element() {
            let parsed = parse_contents(node, None, context);
            log::debug!("<{}> -> {:?}", node.tag_name().name(), parsed);
            rendered.append(parsed);
        } else if node.is_text() {
            let text = node.text().unwrap_or("");
            if !text.trim().is_empty() {
                rendered.push_str(&normalize(text));
            }
        }
        sibling = node.next_sibling();
    }
    rendered
}

/// Render an element, recursing into children unless its tag needs the whole subtree
pub fn parse_contents(
    node: Node,
    parent: Option<TeiTag>,
    context: &mut ConversionContext,
) -> Rendered {
    let tag = TeiTag::from_name(node.tag_name().name());

    if tag == TeiTag::Regularized || parent == Some(TeiTag::Regularized) {
        return Rendered::new();
    }
    if tag == TeiTag::Reading || (tag == TeiTag::Deletion && parent.is_none()) {
        return Rendered::new();
    }

    if !node.has_children() || tag.takes_whole_subtree() {
        let rendered = transform(node, tag, &text_content(node), parent, context);
        // spaces are only meaningful inside <space>
        return if tag == TeiTag::Space {
            rendered
        } else {
            rendered.without_spaces()
        };
    }

    let mut rendered = Rendered::new();
    for child in node.children() {
        if child.is_element() {
            rendered.append(parse_contents(child, Some(tag), context));
        } else if child.is_text() {
            let text = child.text().unwrap_or("");
            rendered.append(transform(node, tag, text, parent, context));
        }
    }
    rendered.without_spaces()
}

/// Apply the rule for one tag to a piece of its text
pub fn transform(
    node: Node,
    tag: TeiTag,
    text: &str,
    parent: Option<TeiTag>,
    context: &mut ConversionContext,
) -> Rendered {
    let text = normalize(text);
    match tag {
        TeiTag::LineBreak => Rendered::line_break(),
        TeiTag::Gap => Rendered::text(render_gap(node)),
        TeiTag::Space => Rendered::text(render_space(node)),
        TeiTag::Supplied => Rendered::text(render_supplied(node)),
        TeiTag::Unclear => Rendered::text(mark_each_char(&text, UNDERDOT)),
        TeiTag::Milestone => render_milestone(node, context),
        TeiTag::Expansion => render_expansion(node, context),
        TeiTag::AbbreviationMarker => Rendered::new(),
        TeiTag::Addition => render_addition(node, context),
        TeiTag::Number => {
            if node.attribute("tick").is_some() {
                Rendered::text(format!("{}'", text))
            } else {
                Rendered::text(text)
            }
        }
        TeiTag::Lemma
        | TeiTag::Original
        | TeiTag::Sic
        | TeiTag::Abbreviation
        | TeiTag::Quote
        | TeiTag::Surplus => Rendered::text(text),
        TeiTag::Substitution => Rendered::text(render_substitution(node, context)),
        TeiTag::Deletion => {
            if parent == Some(TeiTag::Substitution) {
                Rendered::text(text)
            } else {
                Rendered::new()
            }
        }
        TeiTag::Glyph => Rendered::text(render_glyph(node, context)),
        TeiTag::Highlight => render_highlight(node, &text, context),
        TeiTag::Regularized | TeiTag::Reading | TeiTag::Other => Rendered::new(),
    }
}

// ============================================================================
// GAPS AND SPACES
// ============================================================================

/// Render a `<gap>`; missing or malformed attributes give `[?]`
pub fn render_gap(node: Node) -> String {
    gap_extent(node).unwrap_or_else(|| UNKNOWN_EXTENT.to_string())
}

fn gap_extent(node: Node) -> Option<String> {
    if node.attribute("unit")? == "line" {
        return Some(String::new());
    }
    if node.attribute("reason")? == "illegible" {
        // illegible strokes are visible, so no brackets
        let count = match node.attribute("quantity") {
            Some(_) => count_attribute(node, "quantity")?,
            None => averaged_extent(node)?,
        };
        return Some(dashes(count));
    }
    if node.attribute("quantity").is_some() {
        return Some(bracketed(dashes(count_attribute(node, "quantity")?)));
    }
    if let Some(extent) = node.attribute("extent") {
        return Some(if extent == "unknown" { UNKNOWN_EXTENT.to_string() } else { String::new() });
    }
    if node.attribute("atLeast").is_some() {
        return Some(bracketed(dashes(averaged_extent(node)?)));
    }
    None
}

/// Render a `<space>` as literal spaces; missing or malformed attributes give `" ? "`
pub fn render_space(node: Node) -> String {
    space_extent(node).unwrap_or_else(|| " ? ".to_string())
}

fn space_extent(node: Node) -> Option<String> {
    if node.attribute("unit")? == "line" {
        return Some(String::new());
    }
    if node.attribute("quantity").is_some() {
        return Some(" ".repeat(count_attribute(node, "quantity")?));
    }
    if node.attribute("atLeast").is_some() {
        return Some(" ".repeat(averaged_extent(node)?));
    }
    if node.attribute("extent").is_some() {
        return None;
    }
    Some(String::new())
}

fn averaged_extent(node: Node) -> Option<usize> {
    let at_least = u32::try_from(count_attribute(node, "atLeast")?).ok()?;
    let at_most = u32::try_from(count_attribute(node, "atMost")?).ok()?;
    Some(average_extent(at_least, at_most))
}

fn dashes(count: usize) -> String {
    "-".repeat(count)
}

fn bracketed(inner: String) -> String {
    format!("[{}]", inner)
}

/// Restored text becomes a bracketed dash run of the same length
pub fn render_supplied(node: Node) -> String {
    if node.attribute("reason") == Some("omitted") {
        return String::new();
    }
    let length = normalize(&reading_text(node)).chars().count();
    if length == 0 {
        String::new()
    } else {
        bracketed(dashes(length))
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

fn render_milestone(node: Node, context: &mut ConversionContext) -> Rendered {
    let Some(rend) = node.attribute("rend") else {
        return Rendered::new();
    };
    match milestone_symbol(rend) {
        Some(symbol) => {
            let mut rendered = Rendered::line_break();
            rendered.push_str(symbol);
            rendered
        }
        None => {
            context.add_unimplemented("milestone", rend, "unknown milestone rendition");
            Rendered::new()
        }
    }
}

fn render_glyph(node: Node, context: &mut ConversionContext) -> String {
    let Some(glyph_type) = node.attribute("type") else {
        return String::new();
    };
    match glyph_symbol(glyph_type) {
        Some(symbol) => symbol.to_string(),
        None => {
            context.add_unimplemented("g", glyph_type, "unknown glyph type");
            String::new()
        }
    }
}

/// The spelled-out form wins; a bare `<ex>` becomes its abbreviation symbol
fn render_expansion(node: Node, context: &mut ConversionContext) -> Rendered {
    let mut spelled = Rendered::new();
    let mut symbol = String::new();
    for child in node.children() {
        if child.is_text() {
            spelled.push_str(&normalize(child.text().unwrap_or("")));
        } else if child.is_element() {
            if TeiTag::from_name(child.tag_name().name()) == TeiTag::AbbreviationMarker {
                symbol.push_str(abbreviation_symbol(&normalize(&text_content(child))));
            } else {
                spelled.append(parse_contents(child, None, context));
            }
        }
    }
    if spelled.is_empty() {
        Rendered::text(symbol)
    } else {
        spelled
    }
}

// ============================================================================
// ADDITIONS AND CORRECTIONS
// ============================================================================

fn render_addition(node: Node, context: &mut ConversionContext) -> Rendered {
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            text.push_str(&normalize(child.text().unwrap_or("")));
        } else if child.is_element() {
            // nested breaks and insertions have nowhere to go
            text.push_str(&parse_contents(child, None, context).plain_text());
        }
    }
    place_addition(text, node.attribute("place"))
}

/// Inline text, an arrow plus a deferred line, or a bare placement symbol
pub fn place_addition(text: String, place: Option<&str>) -> Rendered {
    let with_arrow = |arrow: &str, side: InsertionSide, text: String| {
        let mut rendered = Rendered::text(arrow);
        rendered.append(Rendered::insertion(side, text));
        rendered
    };
    match place {
        Some("above") => match text.chars().count() {
            0 => Rendered::new(),
            1 => Rendered::text(text),
            _ => with_arrow(arrows::ABOVE, InsertionSide::Before, text),
        },
        Some("below") => with_arrow(arrows::BELOW, InsertionSide::After, text),
        Some("left") => with_arrow(arrows::LEFT, InsertionSide::Before, text),
        Some("right") => with_arrow(arrows::RIGHT, InsertionSide::After, text),
        Some("margin") => Rendered::text(arrows::MARGIN),
        Some("bottom") => Rendered::text(arrows::BOTTOM),
        Some("top") => Rendered::text(arrows::TOP),
        Some("interlinear") => Rendered::insertion(InsertionSide::Before, text),
        _ => Rendered::text(text),
    }
}

/// An inline addition replaces the deletion; otherwise the deleted text stands
fn render_substitution(node: Node, context: &mut ConversionContext) -> String {
    let mut surfaced = String::new();
    for child in node.children().filter(|n| n.is_element()) {
        match TeiTag::from_name(child.tag_name().name()) {
            TeiTag::Addition => {
                if child.attribute("place") == Some("inline") {
                    surfaced = normalize(&text_content(child));
                    break;
                }
            }
            TeiTag::Deletion => {
                for c in child.children() {
                    if c.is_text() {
                        surfaced.push_str(&normalize(c.text().unwrap_or("")));
                    } else if c.is_element() {
                        let parsed = parse_contents(c, Some(TeiTag::Substitution), context);
                        surfaced.push_str(&parsed.plain_text());
                    }
                }
            }
            _ => {}
        }
    }
    BRACKETED_DASHES.replace_all(&surfaced, "").into_owned()
}

// ============================================================================
// RENDITIONS
// ============================================================================

/// Apply a `<hi>` rendition; nested renditions stack their marks outer then inner
fn render_highlight(node: Node, text: &str, context: &mut ConversionContext) -> Rendered {
    let rend = node.attribute("rend");
    if let Some(value) = rend {
        if Rendition::from_rend(value).is_none() {
            context.add_unimplemented("hi", value, "unknown rendition");
        }
    }

    let mut nested_without_content = false;
    for child in node.children().filter(|n| n.is_element()) {
        match TeiTag::from_name(child.tag_name().name()) {
            TeiTag::Highlight => {
                let outer_mark = symbols::render(rend, "");
                let inner_mark = symbols::render(child.attribute("rend"), "");
                let Some(content) = child.children().next() else {
                    nested_without_content = true;
                    continue;
                };
                let mut inner = if content.is_element() {
                    let content_tag = TeiTag::from_name(content.tag_name().name());
                    let content_text = text_content(content);
                    transform(content, content_tag, &content_text, Some(TeiTag::Highlight), context)
                } else {
                    Rendered::text(normalize(&text_content(child)))
                };
                inner.push_str(&outer_mark);
                inner.push_str(&inner_mark);
                return inner;
            }
            TeiTag::Gap => return Rendered::text(symbols::render(rend, &render_gap(child))),
            _ => {}
        }
    }

    if nested_without_content {
        Rendered::new()
    } else {
        Rendered::text(symbols::render(rend, text))
    }
}
