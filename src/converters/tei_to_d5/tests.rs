//! Unit tests for EpiDoc element conversion

use super::converter::{
    convert_block, parse_contents, place_addition, render_gap, render_space, render_supplied,
    ConversionContext,
};
use super::parser::{find_text_blocks, parse_document};
use super::types::{Fragment, Insertion, InsertionSide, Rendered};
use super::*;

fn context() -> ConversionContext {
    ConversionContext::new(&ConversionSettings::default())
}

/// Render the root element of a snippet as a top-level block child
fn render(xml: &str) -> Rendered {
    let doc = parse_document(xml).unwrap();
    parse_contents(doc.root_element(), None, &mut context())
}

fn gap(attributes: &str) -> String {
    let xml = format!("<gap {}/>", attributes);
    let doc = parse_document(&xml).unwrap();
    render_gap(doc.root_element())
}

fn space(attributes: &str) -> String {
    let xml = format!("<space {}/>", attributes);
    let doc = parse_document(&xml).unwrap();
    render_space(doc.root_element())
}

#[test]
fn test_gap_precedence() {
    assert_eq!(gap(r#"reason="lost" quantity="7" unit="line""#), "");
    assert_eq!(gap(r#"reason="illegible" quantity="3" unit="character""#), "---");
    assert_eq!(gap(r#"reason="illegible" atLeast="9" atMost="10" unit="character""#), "----------");
    assert_eq!(gap(r#"reason="illegible" extent="unknown" unit="character""#), "[?]");
    assert_eq!(gap(r#"reason="lost" quantity="4" unit="character""#), "[----]");
    assert_eq!(gap(r#"reason="lost" extent="unknown" unit="character""#), "[?]");
    assert_eq!(gap(r#"reason="lost" extent="5" unit="character""#), "");
    assert_eq!(
        gap(r#"reason="lost" atLeast="11" atMost="15" unit="character""#),
        "[-------------]"
    );
    assert_eq!(gap(r#"reason="lost" unit="character""#), "[?]");
}

#[test]
fn test_gap_attribute_failures_are_unknown_extent() {
    assert_eq!(gap(r#"reason="lost" quantity="3""#), "[?]");
    assert_eq!(gap(r#"quantity="3" unit="character""#), "[?]");
    assert_eq!(gap(r#"reason="lost" quantity="three" unit="character""#), "[?]");
    assert_eq!(gap(r#"reason="lost" atLeast="2" unit="character""#), "[?]");
}

#[test]
fn test_oversized_counts_are_attribute_failures() {
    let huge = "18446744073709551615";
    let lost = format!(r#"reason="lost" quantity="{}" unit="character""#, huge);
    assert_eq!(gap(&lost), "[?]");
    let illegible = format!(r#"reason="illegible" atLeast="2" atMost="{}" unit="character""#, huge);
    assert_eq!(gap(&illegible), "[?]");
    assert_eq!(space(r#"quantity="1000000" unit="character""#), " ? ");
    assert_eq!(space(r#"atLeast="1" atMost="9999" unit="character""#), " ? ");
}

#[test]
fn test_space_rendering() {
    assert_eq!(space(r#"extent="unknown" unit="character""#), " ? ");
    assert_eq!(space(r#"quantity="3" unit="character""#), "   ");
    assert_eq!(space(r#"atLeast="2" atMost="5" unit="character""#), "    ");
    assert_eq!(space(r#"extent="unknown" unit="line""#), "");
    assert_eq!(space(r#"unit="character""#), "");
    assert_eq!(space(r#"quantity="3""#), " ? ");
}

#[test]
fn test_supplied_length_follows_reading_text() {
    let xml = r#"<supplied reason="lost">ἀπο<unclear>γ</unclear>ρα</supplied>"#;
    let doc = parse_document(xml).unwrap();
    assert_eq!(render_supplied(doc.root_element()), "[------]");

    let doc = parse_document(r#"<supplied reason="omitted">καὶ</supplied>"#).unwrap();
    assert_eq!(render_supplied(doc.root_element()), "");

    let doc = parse_document(r#"<supplied reason="lost"> </supplied>"#).unwrap();
    assert_eq!(render_supplied(doc.root_element()), "");
}

#[test]
fn test_addition_placement() {
    let text = |s: &str| s.to_string();
    assert_eq!(place_addition(text("Γ"), Some("above")).plain_text(), "Γ");
    assert!(place_addition(text(""), Some("above")).is_empty());
    assert_eq!(
        place_addition(text("ΓΔ"), Some("above")).fragments(),
        &[
            Fragment::Text("↑".to_string()),
            Fragment::Insertion(Insertion { side: InsertionSide::Before, text: "ΓΔ".to_string() }),
        ]
    );
    assert_eq!(
        place_addition(text("Γ"), Some("right")).fragments()[1],
        Fragment::Insertion(Insertion { side: InsertionSide::After, text: "Γ".to_string() })
    );
    assert_eq!(place_addition(text("Γ"), Some("margin")).plain_text(), "↔");
    assert_eq!(place_addition(text("Γ"), Some("bottom")).plain_text(), "↡");
    assert_eq!(place_addition(text("Γ"), Some("top")).plain_text(), "↟");
    assert_eq!(
        place_addition(text("Γ"), Some("interlinear")).fragments(),
        &[Fragment::Insertion(Insertion { side: InsertionSide::Before, text: "Γ".to_string() })]
    );
    assert_eq!(place_addition(text("Γ"), Some("inline")).plain_text(), "Γ");
    assert_eq!(place_addition(text("Γ"), None).plain_text(), "Γ");
}

#[test]
fn test_regularized_and_alternative_readings_are_dropped() {
    assert!(render("<reg>καί</reg>").is_empty());
    assert!(render("<rdg>καί</rdg>").is_empty());
    assert!(render(r#"<del rend="erasure">καί</del>"#).is_empty());
}

#[test]
fn test_spaces_are_stripped_outside_space() {
    assert_eq!(render("<lem>καὶ τοῦ</lem>").plain_text(), "ΚΑΙΤΟΥ");
    assert_eq!(render(r#"<space quantity="2" unit="character"/>"#).plain_text(), "  ");
}

#[test]
fn test_unclear_marks_every_letter() {
    assert_eq!(render("<unclear>αβ</unclear>").plain_text(), "Α\u{323}Β\u{323}");
}

#[test]
fn test_number_tick() {
    assert_eq!(render(r#"<num value="23" tick="1">κγ</num>"#).plain_text(), "ΚΓ'");
    assert_eq!(render(r#"<num value="23">κγ</num>"#).plain_text(), "ΚΓ");
}

#[test]
fn test_expansion() {
    assert_eq!(render(r#"<expan>Γ<ex cert="low">ανίδι</ex></expan>"#).plain_text(), "Γ");
    assert_eq!(render("<expan><ex>ἔτους</ex></expan>").plain_text(), "\u{10179}");
    assert_eq!(render("<expan><ex>δραχμὰς</ex></expan>").plain_text(), "\u{1017B}");
    assert_eq!(render("<expan><ex>οὐδέν</ex></expan>").plain_text(), "\u{2105}");
    assert_eq!(render("<expan><abbr>δρ</abbr><ex>αχμὰς</ex></expan>").plain_text(), "ΔΡ");
}

#[test]
fn test_substitution_surfaces_one_side() {
    let inline = r#"<subst><add place="inline">τοῦ</add><del rend="corrected">της</del></subst>"#;
    assert_eq!(render(inline).plain_text(), "ΤΟΥ");

    let deletion_first =
        r#"<subst><del rend="corrected">της</del><add place="inline">τοῦ</add></subst>"#;
    assert_eq!(render(deletion_first).plain_text(), "ΤΟΥ");

    let above = r#"<subst><add place="above">τοῦ</add><del rend="corrected">της</del></subst>"#;
    assert_eq!(render(above).plain_text(), "ΤΗΣ");
}

#[test]
fn test_substitution_strips_bracketed_gaps() {
    let xml = concat!(
        r#"<subst><add place="above">α</add><del rend="corrected">"#,
        r#"τ<gap reason="lost" quantity="2" unit="character"/>ς</del></subst>"#
    );
    assert_eq!(render(xml).plain_text(), "ΤΣ");
}

#[test]
fn test_glyphs() {
    assert_eq!(render(r#"<g type="chirho"/>"#).plain_text(), "☧");
    assert!(render(r#"<g type="no-such-sign"/>"#).is_empty());
    assert!(render("<g/>").is_empty());
}

#[test]
fn test_highlight_renditions() {
    assert_eq!(render(r#"<hi rend="acute">ὃ</hi>"#).plain_text(), "Ο\u{301}");
    assert_eq!(render(r#"<hi rend="supraline">ιβ</hi>"#).plain_text(), "Ι\u{305}Β\u{305}");
    assert_eq!(render(r#"<hi rend="tall">γ</hi>"#).plain_text(), "Γ");
    assert_eq!(render("<hi>γ</hi>").plain_text(), "Γ");
}

#[test]
fn test_nested_highlights_stack_outer_then_inner() {
    let xml = r#"<hi rend="asper"><hi rend="acute">ἵ</hi></hi>"#;
    assert_eq!(render(xml).plain_text(), "Ι\u{314}\u{301}");

    let xml = concat!(
        r#"<hi rend="asper"><hi rend="acute">"#,
        r#"<gap reason="lost" quantity="1" unit="character"/></hi></hi>"#
    );
    assert_eq!(render(xml).plain_text(), "[-]\u{314}\u{301}");
}

#[test]
fn test_highlight_over_gap() {
    let xml =
        r#"<hi rend="diaeresis"><gap reason="illegible" quantity="1" unit="character"/></hi>"#;
    assert_eq!(render(xml).plain_text(), "-\u{308}");
}

#[test]
fn test_nested_highlight_without_content_is_empty() {
    assert!(render(r#"<hi rend="asper"><hi rend="acute"/></hi>"#).is_empty());
}

#[test]
fn test_deletion_inside_other_markup_keeps_nested_elements() {
    // the deletion's own letters are dropped, nested markup still renders
    let xml = r#"<choice><del rend="erasure">α<supplied reason="lost">β</supplied></del></choice>"#;
    assert_eq!(render(xml).plain_text(), "[-]");
}

#[test]
fn test_block_starts_after_first_line_break() {
    let xml = r#"<ab>προοίμιον<lb n="1"/>α<lb n="2"/>β</ab>"#;
    let doc = parse_document(xml).unwrap();
    let blocks = find_text_blocks(&doc);
    let rendered = convert_block(blocks[0].first_line_break, &mut context());
    let lines: Vec<String> = rendered.into_raw_lines().into_iter().map(|l| l.text).collect();
    assert_eq!(lines, vec!["Α", "Β"]);
}

#[test]
fn test_unknown_milestone_is_recorded_when_enabled() {
    let xml = concat!(
        r#"<div><ab><lb/>α<milestone rend="box" unit="undefined"/>"#,
        r#"β<g type="mystery"/></ab></div>"#
    );

    let quiet = convert_tei_to_d5(xml, None).unwrap();
    assert!(quiet.unimplemented.is_empty());

    let settings = ConversionSettings {
        record_unimplemented: true,
        ..ConversionSettings::default()
    };
    let verbose = convert_tei_to_d5(xml, Some(settings)).unwrap();
    assert_eq!(verbose.text_blocks[0].lines, vec!["ΑΒ"]);
    let recorded: Vec<(&str, Option<&str>)> = verbose
        .unimplemented
        .iter()
        .map(|s| (s.element_type.as_str(), s.value.as_deref()))
        .collect();
    assert_eq!(recorded, vec![("milestone", Some("box")), ("g", Some("mystery"))]);
    assert_eq!(verbose.unimplemented[0].block_index, Some(0));
}

#[test]
fn test_invalid_xml_fails_the_document() {
    let err = convert_tei_to_d5("<ab><lb/>α", None).unwrap_err();
    assert!(matches!(err, ConversionError::Parse(ParseError::InvalidXml(_))));
}

#[test]
fn test_missing_file_is_unreadable() {
    let err = convert_file("/nonexistent/epidoc/file.xml", None).unwrap_err();
    match err {
        ConversionError::Parse(ParseError::Unreadable { path, .. }) => {
            assert_eq!(path, "/nonexistent/epidoc/file.xml")
        }
        other => panic!("Expected unreadable source, got {:?}", other),
    }
}
