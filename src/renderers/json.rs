//! JSON rendering: one object per document, one entry per text block

use super::write_output;
use crate::converters::tei_to_d5::{ConversionError, ConversionResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct D5Document<'a> {
    id: &'a str,
    languages: &'a BTreeSet<String>,
    text_blocks: Vec<D5Block<'a>>,
}

#[derive(Serialize)]
struct D5Block<'a> {
    n: Option<&'a str>,
    subtype: Option<&'a str>,
    text: &'a [String],
}

/// Render a result as a D5 JSON document
pub fn to_json(result: &ConversionResult, id: &str) -> serde_json::Result<String> {
    let document = D5Document {
        id,
        languages: &result.state.languages,
        text_blocks: result
            .text_blocks
            .iter()
            .map(|block| D5Block {
                n: block.n.as_deref(),
                subtype: block.subtype.as_deref(),
                text: &block.lines,
            })
            .collect(),
    };
    serde_json::to_string(&document)
}

/// Write `<dir>/<id>.json`
pub fn write_json(
    dir: impl AsRef<Path>,
    id: &str,
    result: &ConversionResult,
) -> Result<PathBuf, ConversionError> {
    let json = to_json(result, id)
        .map_err(|e| ConversionError::Io(format!("JSON serialization error: {}", e)))?;
    write_output(dir.as_ref(), id, "json", &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::tei_to_d5::TextBlock;
    use crate::diagnostics::FormatterState;

    #[test]
    fn test_json_layout() {
        let languages: BTreeSet<String> = ["grc".to_string()].into_iter().collect();
        let result = ConversionResult {
            text_blocks: vec![TextBlock {
                n: Some("r".to_string()),
                subtype: None,
                lines: vec!["ΑΒ".to_string(), "Γ[".to_string()],
            }],
            state: FormatterState::new(languages),
            unimplemented: Vec::new(),
        };

        let json = to_json(&result, "12345").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "12345",
                "languages": ["grc"],
                "text_blocks": [{"n": "r", "subtype": null, "text": ["ΑΒ", "Γ["]}]
            })
        );
    }

    #[test]
    fn test_json_keeps_greek_unescaped() {
        let result = ConversionResult {
            text_blocks: vec![TextBlock { n: None, subtype: None, lines: vec!["ΑΒ".to_string()] }],
            state: FormatterState::default(),
            unimplemented: Vec::new(),
        };
        assert!(to_json(&result, "x").unwrap().contains("ΑΒ"));
    }
}
