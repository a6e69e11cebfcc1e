//! Renderers for converted documents
//!
//! Serializes a [`ConversionResult`](crate::ConversionResult) into the two
//! persisted D5 representations: a JSON document and a flat text file.

pub mod json;
pub mod txt;

pub use json::{to_json, write_json};
pub use txt::{to_txt, write_txt};

use crate::converters::tei_to_d5::ConversionError;
use std::path::{Path, PathBuf};

/// Write `contents` to `<dir>/<id>.<extension>`, creating `dir` if needed
fn write_output(
    dir: &Path,
    id: &str,
    extension: &str,
    contents: &str,
) -> Result<PathBuf, ConversionError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", id, extension));
    std::fs::write(&path, contents)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
