//! D5 line formatter and validator
//!
//! Every line leaving the converter goes through [`format_line`] and then
//! [`validate_line`]. Formatting is a pure string transform; validation
//! records diagnostics in the document's [`FormatterState`].
//!
//! [`FormatterState`]: crate::diagnostics::FormatterState

pub mod charset;
pub mod format;
pub mod validate;

pub use format::format_line;
pub use validate::{validate_line, validate_line_bounded, CONFUSABLES};

use thiserror::Error;

/// Internal consistency failures of the formatter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Typo correction kept finding substitutions past its pass bound
    #[error("typo correction did not converge after {passes} passes: {line}")]
    CorrectionDiverged { line: String, passes: usize },
}
