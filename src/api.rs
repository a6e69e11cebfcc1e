//! WASM API for the EpiDoc converter
//!
//! JavaScript-facing wrappers around the library entry points. Results
//! cross the boundary through serde-wasm-bindgen; errors become strings.

use crate::converters::tei_to_d5::{convert_tei_to_d5, ConversionSettings};
use crate::formatter::format_line;
use crate::renderers::to_json;
use crate::text::normalize;
use wasm_bindgen::prelude::*;

/// Convert an EpiDoc document to D5 text blocks
///
/// # Parameters
/// - `xml`: The EpiDoc/TEI document
/// - `settings_js`: `ConversionSettings` object, or `undefined` for defaults
///
/// # Returns
/// The `ConversionResult` (text blocks, diagnostics, unimplemented markup)
#[wasm_bindgen(js_name = convertTeiToD5)]
pub fn convert_tei_to_d5_js(xml: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    log::info!("convertTeiToD5 called: {} bytes", xml.len());

    let settings: Option<ConversionSettings> =
        if settings_js.is_undefined() || settings_js.is_null() {
            None
        } else {
            Some(serde_wasm_bindgen::from_value(settings_js).map_err(|e| {
                log::error!("Settings deserialization error: {}", e);
                JsValue::from_str(&format!("Settings deserialization error: {}", e))
            })?)
        };

    let result = convert_tei_to_d5(xml, settings).map_err(|e| {
        log::error!("Conversion error: {}", e);
        JsValue::from_str(&format!("Conversion error: {}", e))
    })?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("WASM serialization error: {}", e)))
}

/// Convert an EpiDoc document straight to its D5 JSON representation
#[wasm_bindgen(js_name = toD5Json)]
pub fn to_d5_json(xml: &str, id: &str) -> Result<String, JsValue> {
    let result = convert_tei_to_d5(xml, None)
        .map_err(|e| JsValue::from_str(&format!("Conversion error: {}", e)))?;
    to_json(&result, id).map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

/// Format one raw line into D5 form
#[wasm_bindgen(js_name = formatLine)]
pub fn format_line_js(line: &str) -> String {
    format_line(line)
}

/// Map Greek text to the reduced majuscule alphabet
#[wasm_bindgen(js_name = normalizeMajuscule)]
pub fn normalize_majuscule(text: &str) -> String {
    normalize(text)
}
