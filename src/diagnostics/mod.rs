//! Diagnostics for converted lines
//!
//! Line-level problems found while validating D5 output. Diagnostics never
//! abort a conversion: they accumulate in the per-document
//! [`FormatterState`] and are handed back to the caller with the lines.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// The line cannot be trusted as D5 output
    Error,
    Warning,
}

/// Class of a line-level problem
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Bracket/placeholder structure fits neither well-formed line shape
    GapHandling,
    /// Characters outside the allowed D5 character class
    ForbiddenCharacters,
    /// An empty bracket pair survived formatting
    ResidualMarkup,
}

/// A problem found in one output line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    /// The line as it was when the problem was found
    pub line: String,
    /// Offending characters in order of appearance (forbidden-character diagnostics only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden: Vec<char>,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    pub fn gap_handling(line: &str) -> Self {
        Self {
            kind: DiagnosticKind::GapHandling,
            severity: DiagnosticSeverity::Error,
            line: line.to_string(),
            forbidden: Vec::new(),
            message: format!("Invalid gap handling: {}", line),
        }
    }

    pub fn forbidden_characters(line: &str, forbidden: Vec<char>) -> Self {
        let message = format!("Forbidden character(s) {:?} found in \"{}\"", forbidden, line);
        Self {
            kind: DiagnosticKind::ForbiddenCharacters,
            severity: DiagnosticSeverity::Error,
            line: line.to_string(),
            forbidden,
            message,
        }
    }

    pub fn residual_markup(line: &str) -> Self {
        Self {
            kind: DiagnosticKind::ResidualMarkup,
            severity: DiagnosticSeverity::Error,
            line: line.to_string(),
            forbidden: Vec::new(),
            message: "Contains \"[]\"".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One automatic Latin-to-Greek substitution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CorrectionRecord {
    pub from: char,
    pub to: char,
    /// The line after the substitution
    pub line: String,
}

impl fmt::Display for CorrectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Changed \"{}\" to \"{}\" in {}", self.from, self.to, self.line)
    }
}

/// Validation state owned by exactly one document conversion
///
/// Built fresh for every document and returned with its result; never
/// reused for a second document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatterState {
    /// Diagnostics in the order they were found
    pub errors: Vec<Diagnostic>,
    /// Substitutions, grouped by the validation pass that made them
    pub changes: Vec<Vec<CorrectionRecord>>,
    /// `xml:lang` codes found in the document, without `en`
    pub languages: BTreeSet<String>,
}

impl FormatterState {
    /// Create state for a document written in `languages`
    pub fn new(languages: BTreeSet<String>) -> Self {
        Self {
            errors: Vec::new(),
            changes: Vec::new(),
            languages,
        }
    }

    /// True when the document is Greek and nothing else
    ///
    /// Typo correction is only safe under this condition: in mixed
    /// documents Latin letters may be genuine.
    pub fn is_greek_only(&self) -> bool {
        self.languages.len() == 1 && self.languages.contains("grc")
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostic messages in order, as written to logs
    pub fn error_log(&self) -> Vec<String> {
        self.errors.iter().map(|d| d.message.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        let diag = Diagnostic::forbidden_characters("ΑΒ0", vec!['0']);
        assert_eq!(diag.kind, DiagnosticKind::ForbiddenCharacters);
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.message, "Forbidden character(s) ['0'] found in \"ΑΒ0\"");

        let diag = Diagnostic::gap_handling("Α]Β");
        assert_eq!(diag.to_string(), "Invalid gap handling: Α]Β");

        let diag = Diagnostic::residual_markup("Α[]");
        assert_eq!(diag.message, "Contains \"[]\"");
    }

    #[test]
    fn test_greek_only_detection() {
        let mut langs = BTreeSet::new();
        assert!(!FormatterState::new(langs.clone()).is_greek_only());

        langs.insert("grc".to_string());
        assert!(FormatterState::new(langs.clone()).is_greek_only());

        langs.insert("la".to_string());
        assert!(!FormatterState::new(langs).is_greek_only());
    }

    #[test]
    fn test_state_collects_errors_in_order() {
        let mut state = FormatterState::default();
        assert!(!state.has_errors());

        state.add(Diagnostic::gap_handling("]["));
        state.add(Diagnostic::residual_markup("Α[]"));
        assert!(state.has_errors());
        assert_eq!(
            state.error_log(),
            vec!["Invalid gap handling: ][".to_string(), "Contains \"[]\"".to_string()]
        );
    }

    #[test]
    fn test_correction_record_display() {
        let record = CorrectionRecord { from: 'A', to: 'Α', line: "ΑΒ".to_string() };
        assert_eq!(record.to_string(), "Changed \"A\" to \"Α\" in ΑΒ");
    }
}
