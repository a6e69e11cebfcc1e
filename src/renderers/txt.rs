//! Plain text rendering: every line of every block, newline separated

use super::write_output;
use crate::converters::tei_to_d5::{ConversionError, ConversionResult};
use std::path::{Path, PathBuf};

/// Join all lines with `\n`; no newline after the last one
pub fn to_txt(result: &ConversionResult) -> String {
    result.lines().collect::<Vec<_>>().join("\n")
}

/// Write `<dir>/<id>.txt`, replacing any previous file
pub fn write_txt(
    dir: impl AsRef<Path>,
    id: &str,
    result: &ConversionResult,
) -> Result<PathBuf, ConversionError> {
    write_output(dir.as_ref(), id, "txt", &to_txt(result))
}
