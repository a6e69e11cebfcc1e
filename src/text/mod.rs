//! Text normalization primitives
//!
//! Pure character-level transforms shared by the converter and the line
//! formatter. Nothing in here knows about markup.

pub mod majuscule;

pub use majuscule::{normalize, output_alphabet};

/// Append `mark` after every character of `text`
///
/// Used for marks that apply letter by letter (underdot for unclear text,
/// supraline and underline renditions).
pub fn mark_each_char(text: &str, mark: &str) -> String {
    let mut marked = String::with_capacity(text.len() * (1 + mark.len()));
    for c in text.chars() {
        marked.push(c);
        marked.push_str(mark);
    }
    marked
}

/// Round half to even, matching how quantity ranges were historically averaged
pub fn average_extent(at_least: u32, at_most: u32) -> usize {
    let sum = at_least as u64 + at_most as u64;
    let half = sum / 2;
    if sum % 2 == 1 && half % 2 == 1 {
        (half + 1) as usize
    } else {
        half as usize
    }
}
